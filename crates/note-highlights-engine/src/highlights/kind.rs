use std::sync::OnceLock;

use regex::Regex;

/// Highlight inline type with owned delimiter constants.
///
/// All knowledge of the `==` marker lives here; the scanner asks for the
/// compiled pattern and never hardcodes the delimiter itself.
pub struct Highlight;

impl Highlight {
    /// Opening marker.
    pub const OPEN: &'static str = "==";
    /// Closing marker.
    pub const CLOSE: &'static str = "==";

    /// Non-greedy pattern pairing each opening marker with the nearest closing
    /// marker. Capture group 1 is the raw content; `[\s\S]` lets it span lines.
    pub fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            let source = format!(
                r"{}([\s\S]*?){}",
                regex::escape(Self::OPEN),
                regex::escape(Self::CLOSE)
            );
            Regex::new(&source).expect("Invalid highlight regex")
        })
    }
}
