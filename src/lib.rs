//! Poem Nav - browser enhancements for the poetry site
//!
//! Core modules:
//! - `model`: Author/poem payload types and newest-poem selection
//! - `collation`: Vietnamese-aware author ordering
//! - `dropdown`: Author dropdown controller and its view seam
//! - `comment_form`: Enter-key handling for the comment form
//! - `settings`: Page wiring (selectors, routes, strings)
//! - `platform`: web-sys bindings (wasm32 only)

pub mod collation;
pub mod comment_form;
pub mod dropdown;
pub mod error;
pub mod model;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use dropdown::{AuthorDropdown, DropdownView, MenuEvent};
pub use error::LoadError;
pub use model::{Author, Poem};
pub use settings::Settings;

/// Site constants
pub mod consts {
    /// Authors payload endpoint
    pub const AUTHORS_ENDPOINT: &str = "/api/authors";
    /// Route prefix for author and poem detail pages
    pub const AUTHOR_ROUTE: &str = "/tac-gia";
    /// Shown in the poem list when an author has no works
    pub const EMPTY_PLACEHOLDER: &str = "Chưa có tác phẩm.";
    /// Poems shown per hovered author
    pub const NEWEST_LIMIT: usize = 3;
    /// Collation locale for author names
    pub const COLLATION_LOCALE: &str = "vi";
}

/// Author detail page: `{route}/{author}/`
///
/// Slugs are expected to be URL-safe already and are not encoded.
#[inline]
pub fn author_href(route: &str, author_slug: &str) -> String {
    format!("{}/{}/", route.trim_end_matches('/'), author_slug)
}

/// Poem detail page: `{route}/{author}/{poem}/`
#[inline]
pub fn poem_href(route: &str, author_slug: &str, poem_slug: &str) -> String {
    format!("{}/{}/{}/", route.trim_end_matches('/'), author_slug, poem_slug)
}
