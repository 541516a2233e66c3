use serde::Serialize;

use crate::position::{Position, PositionRange, Span};

/// A highlight found in one extraction pass.
///
/// Offsets bound the raw content between the markers (leading and trailing
/// whitespace included); `text` is the trimmed view of that region and is
/// never empty. Entries carry no identity across passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightEntry {
    /// `"{line}:{column}:{start_offset}"` of the start; unique within a pass.
    pub id: String,
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub start_position: Position,
    pub end_position: Position,
}

impl HighlightEntry {
    pub(crate) fn new(text: String, offsets: Span, start: Position, end: Position) -> Self {
        Self {
            id: entry_id(start, offsets.start),
            text,
            start_offset: offsets.start,
            end_offset: offsets.end,
            start_position: start,
            end_position: end,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start_offset, self.end_offset)
    }

    /// Unnormalized position range; see [`crate::position::normalize_range`].
    pub fn range(&self) -> PositionRange {
        PositionRange::new(self.start_position, self.end_position)
    }

    /// One-based line label shown under the highlight in the panel.
    pub fn line_label(&self) -> String {
        format!("Line {}", self.start_position.line + 1)
    }
}

fn entry_id(start: Position, offset: usize) -> String {
    format!("{}:{}:{}", start.line, start.column, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HighlightEntry {
        HighlightEntry::new(
            "important text".into(),
            Span::new(16, 30),
            Position::new(1, 10),
            Position::new(1, 24),
        )
    }

    #[test]
    fn id_is_derived_from_start() {
        assert_eq!(sample().id, "1:10:16");
    }

    #[test]
    fn line_label_is_one_based() {
        assert_eq!(sample().line_label(), "Line 2");
    }

    #[test]
    fn span_and_range() {
        let entry = sample();
        assert_eq!(entry.span(), Span::new(16, 30));
        assert_eq!(entry.range().to_string(), "1:10..1:24");
    }
}
