//! `GET /api/authors`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::dropdown::WebDropdown;
use crate::error::LoadError;
use crate::model::{Author, decode_authors};

fn js_error(value: JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", value))
}

/// Fetch and decode the author list
pub async fn fetch_authors(endpoint: &str) -> Result<Vec<Author>, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or(LoadError::NotText)?;
    decode_authors(&body)
}

/// Fetch once and hand the outcome to the controller
pub async fn load_authors(dropdown: Rc<RefCell<WebDropdown>>, endpoint: String) {
    let started = js_sys::Date::now();
    let result = fetch_authors(&endpoint).await;
    log::debug!("Author fetch settled in {:.0} ms", js_sys::Date::now() - started);

    match dropdown.try_borrow_mut() {
        Ok(mut d) => d.load(result),
        Err(_) => log::debug!("Dropdown busy, author list discarded"),
    }
}
