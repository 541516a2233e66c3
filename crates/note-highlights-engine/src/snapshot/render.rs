use crate::highlights::HighlightEntry;

/// Renders entries one per line as `start..end [offsets] id "text"`.
///
/// Newlines and quotes inside the text are escaped so every entry stays on
/// a single line. An empty pass renders as `(none)`.
pub fn render(entries: &[HighlightEntry]) -> String {
    if entries.is_empty() {
        return "(none)".to_string();
    }

    entries
        .iter()
        .map(|e| {
            format!(
                "{} [{}..{}] {} {:?}",
                e.range(),
                e.start_offset,
                e.end_offset,
                e.id,
                e.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
