use crate::highlights::{HighlightEntry, trim_content};
use crate::position::LineOffsets;

pub fn check(text: &str, entries: &[HighlightEntry]) {
    let n = text.chars().count();
    let lines = LineOffsets::build(text);
    let mut previous_end = 0;

    for e in entries {
        assert!(
            e.start_offset <= e.end_offset && e.end_offset <= n,
            "highlight offsets out of bounds: {}..{} (text len: {})",
            e.start_offset,
            e.end_offset,
            n
        );
        assert!(
            e.start_offset >= previous_end,
            "highlight {} starts before the previous one ended at {}",
            e.id,
            previous_end
        );
        assert!(!e.text.is_empty(), "highlight {} has empty text", e.id);
        let sliced = e.span().slice(text);
        assert_eq!(
            trim_content(&sliced),
            e.text,
            "highlight {} text does not match its span",
            e.id
        );
        assert_eq!(
            lines.position_to_offset(e.start_position),
            Some(e.start_offset),
            "start position {} does not resolve to offset {}",
            e.start_position,
            e.start_offset
        );
        assert_eq!(
            lines.position_to_offset(e.end_position),
            Some(e.end_offset),
            "end position {} does not resolve to offset {}",
            e.end_position,
            e.end_offset
        );
        previous_end = e.end_offset;
    }
}
