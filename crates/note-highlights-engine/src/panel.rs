//! Display state for a highlights panel.
//!
//! The panel is a read-only projection of one extraction pass plus an
//! optional note name and status message. Hosts rebuild it whenever the
//! note changes and render it however they like.

use serde::Serialize;

use crate::highlights::{HighlightEntry, collect_highlights};

pub const EMPTY_NOTE_MESSAGE: &str = "Open a markdown note to view highlights.";
pub const NO_MATCHES_MESSAGE: &str = "No highlights found in this note.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub file_name: Option<String>,
    pub highlights: Vec<HighlightEntry>,
    pub message: Option<String>,
}

/// One rendered row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub text: String,
    pub meta: String,
}

impl PanelState {
    /// State shown when no note is open.
    pub fn no_note() -> Self {
        Self {
            file_name: None,
            highlights: vec![],
            message: Some(EMPTY_NOTE_MESSAGE.to_string()),
        }
    }

    /// Extracts highlights from `content` and wraps them for display.
    pub fn for_note(file_name: impl Into<String>, content: &str) -> Self {
        let highlights = collect_highlights(content);
        let message = highlights
            .is_empty()
            .then(|| NO_MATCHES_MESSAGE.to_string());
        Self {
            file_name: Some(file_name.into()),
            highlights,
            message,
        }
    }

    /// The status line to show instead of the list, if any.
    ///
    /// A state with neither message nor highlights still gets the message
    /// matching whether a note is open.
    pub fn status(&self) -> Option<&str> {
        if let Some(message) = &self.message {
            return Some(message);
        }
        if self.highlights.is_empty() {
            return Some(if self.file_name.is_some() {
                NO_MATCHES_MESSAGE
            } else {
                EMPTY_NOTE_MESSAGE
            });
        }
        None
    }

    /// Rows for the list: highlight text (truncated to `max_chars`) and its line label.
    pub fn items(&self, max_chars: usize) -> Vec<PanelItem> {
        self.highlights
            .iter()
            .map(|h| PanelItem {
                text: preview(&h.text, max_chars),
                meta: h.line_label(),
            })
            .collect()
    }
}

/// Truncates `text` to `max` chars with a "..." suffix if needed.
pub fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
