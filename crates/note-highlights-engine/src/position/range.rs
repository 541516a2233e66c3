use xi_rope::Rope;

use super::types::{Position, PositionRange};

/// Line geometry of a target document that positions are clamped against.
///
/// Line lengths are in chars and exclude the line terminator (`\n` or `\r\n`).
pub trait LineSource {
    /// Index of the last line. A trailing newline counts as opening an empty line.
    fn last_line(&self) -> usize;

    /// Char length of `line`, or 0 when the line does not exist.
    fn line_len(&self, line: usize) -> usize;
}

impl LineSource for str {
    fn last_line(&self) -> usize {
        self.matches('\n').count()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines().nth(line).map_or(0, |l| l.chars().count())
    }
}

impl LineSource for String {
    fn last_line(&self) -> usize {
        self.as_str().last_line()
    }

    fn line_len(&self, line: usize) -> usize {
        self.as_str().line_len(line)
    }
}

impl LineSource for Rope {
    fn last_line(&self) -> usize {
        self.line_of_offset(self.len())
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines(..).nth(line).map_or(0, |l| l.chars().count())
    }
}

/// Clamps `pos` to a valid location in `doc`.
///
/// The line is clamped to `[0, last_line]` first, then the column to the
/// length of that (clamped) line.
pub fn clamp_position<S: LineSource + ?Sized>(doc: &S, pos: Position) -> Position {
    let line = pos.line.min(doc.last_line());
    let column = pos.column.min(doc.line_len(line));
    Position::new(line, column)
}

/// Clamps both ends of a range to `doc` and orders them.
///
/// The positions may have been computed against a different or since-edited
/// text; the result is always a valid, non-decreasing range in `doc`.
pub fn normalize_range<S: LineSource + ?Sized>(
    doc: &S,
    start: Position,
    end: Position,
) -> PositionRange {
    let start = clamp_position(doc, start);
    let end = clamp_position(doc, end);
    if end < start {
        PositionRange::new(end, start)
    } else {
        PositionRange::new(start, end)
    }
}
