//! Page wiring settings
//!
//! Defaults match the site's templates. A page can override any field with a
//! JSON blob in `<script type="application/json" id="poem-nav-settings">`.

use serde::Deserialize;

use crate::consts;

/// Selectors, routes and strings the enhancements depend on
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Data ===
    /// Authors payload endpoint
    pub endpoint: String,
    /// Route prefix for detail pages
    pub author_route: String,

    // === Dropdown DOM contract ===
    /// Id of the dropdown container
    pub dropdown_id: String,
    /// Author list, looked up inside the dropdown
    pub author_list_selector: String,
    /// Poem list, looked up inside the dropdown
    pub poem_list_selector: String,
    /// Element whose hover opens the dropdown
    pub wrapper_selector: String,
    /// Class toggled on the dropdown while hovered
    pub open_class: String,

    // === Comment form ===
    pub name_input_selector: String,
    pub content_selector: String,

    // === Presentation ===
    /// Poem list text for authors without works
    pub empty_placeholder: String,
    /// Poems shown per author
    pub newest_limit: usize,
    /// BCP 47 tag used to order author names
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: consts::AUTHORS_ENDPOINT.to_string(),
            author_route: consts::AUTHOR_ROUTE.to_string(),

            dropdown_id: "authorDropdown".to_string(),
            author_list_selector: ".author-list".to_string(),
            poem_list_selector: ".poem-list".to_string(),
            wrapper_selector: ".nav-author".to_string(),
            open_class: "open".to_string(),

            name_input_selector: ".comment-form #name".to_string(),
            content_selector: ".comment-form #content".to_string(),

            empty_placeholder: consts::EMPTY_PLACEHOLDER.to_string(),
            newest_limit: consts::NEWEST_LIMIT,
            locale: consts::COLLATION_LOCALE.to_string(),
        }
    }
}

impl Settings {
    /// Id of the optional in-page override
    pub const ELEMENT_ID: &'static str = "poem-nav-settings";

    /// Parse an override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::debug!("Loaded settings override from page");
                    return settings;
                }
                Err(e) => log::debug!("Ignoring invalid settings override: {}", e),
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
