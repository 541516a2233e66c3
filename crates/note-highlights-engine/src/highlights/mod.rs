//! # Highlight Extraction
//!
//! Finds `==highlighted==` regions in note text and turns them into
//! [`HighlightEntry`] values carrying both char offsets and positions.
//!
//! ## Modules
//!
//! - **`kind`**: `Highlight` owns the delimiter constants and compiled pattern
//! - **`cursor`**: `CharCursor` converts the regex engine's byte indices to char offsets
//! - **`scan`**: `find_spans()` yields every raw match, untrimmed
//! - **`entry`**: `HighlightEntry`, the output unit
//!
//! ## Matching Rules
//!
//! Each opening `==` pairs with the nearest following `==`, across lines if
//! needed. Matches are consumed left to right without overlap. Content that is
//! empty or all whitespace is dropped; `====` and `==   ==` produce nothing.

pub mod cursor;
pub mod entry;
pub mod kind;
pub mod scan;

pub use entry::HighlightEntry;
pub use kind::Highlight;
pub use scan::{RawSpan, find_spans, trim_content};

use crate::position::LineOffsets;

/// Extracts all highlights from `text` in document order.
///
/// Pure and total: empty text or text without marker pairs gives an empty vec.
pub fn collect_highlights(text: &str) -> Vec<HighlightEntry> {
    if text.is_empty() {
        return vec![];
    }

    let lines = LineOffsets::build(text);
    let entries: Vec<HighlightEntry> = find_spans(text)
        .into_iter()
        .filter_map(|raw| {
            let display = raw.trimmed();
            if display.is_empty() {
                log::trace!("skipping blank highlight at offset {}", raw.content.start);
                return None;
            }
            Some(HighlightEntry::new(
                display.to_string(),
                raw.content,
                lines.position_of(raw.content.start),
                lines.position_of(raw.content.end),
            ))
        })
        .collect();

    log::debug!(
        "collected {} highlights over {} lines",
        entries.len(),
        lines.line_count()
    );
    entries
}
