use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlTextAreaElement, KeyboardEvent};

use crate::comment_form::{KeyOutcome, on_name_keydown};
use crate::settings::Settings;

/// Make Enter in the name field move to the content field
///
/// Nothing is attached unless both fields are on the page.
pub fn install_comment_form(document: &Document, settings: &Settings) {
    let Some(name_input) = document.query_selector(&settings.name_input_selector).ok().flatten() else {
        return;
    };
    let Some(content) = document
        .query_selector(&settings.content_selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return;
    };

    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if let KeyOutcome::MoveToContent { caret } = on_name_keydown(&event.key(), &content.value()) {
            event.prevent_default();
            let _ = content.focus();
            let _ = content.set_selection_range(caret, caret);
        }
    });
    let _ = name_input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
