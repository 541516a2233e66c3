use crate::position::Span;

use super::{cursor::CharCursor, kind::Highlight};

/// One delimiter match before trimming or filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpan<'a> {
    /// Char span of the content between the markers, untrimmed.
    pub content: Span,
    /// The content itself, borrowed from the scanned text.
    pub raw: &'a str,
}

impl RawSpan<'_> {
    /// The content with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        trim_content(self.raw)
    }
}

/// Strips Unicode whitespace and byte order marks from both ends of `s`.
///
/// U+FEFF is not `White_Space` but is stripped too, so content holding only
/// byte order marks counts as blank.
pub fn trim_content(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Scans `text` left to right for `==...==` regions.
///
/// Matches never overlap: after a match, scanning resumes right after its
/// closing marker. Whitespace-only and empty content is kept here; filtering
/// is the caller's business.
pub fn find_spans(text: &str) -> Vec<RawSpan<'_>> {
    let mut cur = CharCursor::new(text);
    let mut out = vec![];

    for caps in Highlight::pattern().captures_iter(text) {
        let Some(inner) = caps.get(1) else {
            continue;
        };
        let start = cur.advance_to(inner.start());
        let end = cur.advance_to(inner.end());
        out.push(RawSpan {
            content: Span { start, end },
            raw: inner.as_str(),
        });
    }

    out
}
