//! Comment form: Enter in the name field jumps to the content field
//!
//! Only the decision lives here; `platform` applies it to the DOM.

/// What the name field's keydown handler should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser handle the key
    Pass,
    /// Cancel the default (form submit), focus content, put the caret at `caret`
    MoveToContent { caret: u32 },
}

/// Decide how to handle a keydown in the name field
pub fn on_name_keydown(key: &str, content: &str) -> KeyOutcome {
    if key == "Enter" {
        KeyOutcome::MoveToContent {
            caret: caret_end(content),
        }
    } else {
        KeyOutcome::Pass
    }
}

/// Caret offset at the end of `content`, in UTF-16 units like `setSelectionRange`
pub fn caret_end(content: &str) -> u32 {
    content.encode_utf16().count() as u32
}
