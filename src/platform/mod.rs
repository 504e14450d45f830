//! Browser bindings
//!
//! Wires the controller and the comment form handler to the page:
//! - DOM readiness
//! - Element lookup (each feature turns itself off when its elements are missing)
//! - Event listeners
//! - Fetching the author list

mod comment_form;
mod dropdown;
mod fetch;

use wasm_bindgen::prelude::*;

use crate::settings::Settings;

pub use comment_form::install_comment_form;
pub use dropdown::{WebDropdown, WebDropdownView, install_dropdown, install_hover};
pub use fetch::{fetch_authors, load_authors};

/// Entry point: set up logging, then wire every feature once the DOM is parsed
pub fn start() {
    console_error_panic_hook::set_once();
    // Pages stay quiet at Info: widget setup, loading and silent failures
    // log at debug only.
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialized");
    }

    when_dom_ready(|| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let settings = Settings::load();

        let dropdown = install_dropdown(&document, &settings);
        install_hover(&document, &settings, dropdown.as_ref());
        install_comment_form(&document, &settings);

        if let Some(dropdown) = dropdown {
            wasm_bindgen_futures::spawn_local(load_authors(dropdown, settings.endpoint.clone()));
        }
        log::debug!("Poem nav ready");
    });
}

/// Run `f` once the document is parsed
///
/// The module can finish loading after `DOMContentLoaded` has fired, so an
/// already-parsed document runs `f` right away.
pub fn when_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let closure = Closure::once(move |_event: web_sys::Event| f());
    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}
