use super::types::Position;

/// Precomputed line-start offsets for one document text.
///
/// Entry `i` is the char offset of the first character of line `i`. The first
/// entry is always 0 and the entries are strictly increasing. The table also
/// records the char length of the text it was built from so offsets past the
/// end can be clamped without rescanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOffsets {
    starts: Vec<usize>,
    len: usize,
}

impl LineOffsets {
    /// Builds the table in a single forward pass over `text`.
    ///
    /// The char after every `'\n'` starts a new line, so a trailing newline
    /// produces a final empty line.
    pub fn build(text: &str) -> Self {
        let mut starts = vec![0];
        let mut len = 0;
        for (idx, ch) in text.chars().enumerate() {
            if ch == '\n' {
                starts.push(idx + 1);
            }
            len = idx + 1;
        }
        Self { starts, len }
    }

    /// Number of lines, always at least 1.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Char length of the source text.
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// Offset of the first char of `line`, if the line exists.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.starts.get(line).copied()
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.starts
    }

    /// Resolves a possibly-negative offset to a position.
    ///
    /// Offsets at or below zero resolve to the origin; offsets past the end
    /// of the text resolve to the end.
    pub fn offset_to_position(&self, offset: i64) -> Position {
        if offset <= 0 {
            return Position::default();
        }
        self.position_of(usize::try_from(offset).unwrap_or(usize::MAX))
    }

    /// Resolves an in-memory offset to a position, clamping to the text end.
    pub fn position_of(&self, offset: usize) -> Position {
        if offset == 0 {
            return Position::default();
        }
        let offset = offset.min(self.len);
        let line = self.line_of(offset);
        Position::new(line, offset - self.starts[line])
    }

    /// Index of the line containing `offset`: the last `i` with `starts[i] <= offset`.
    fn line_of(&self, offset: usize) -> usize {
        // starts[0] == 0, so at least one entry satisfies the predicate.
        self.starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Inverse of [`Self::position_of`] for positions inside the text.
    ///
    /// Returns `None` when the line does not exist or the column runs past the
    /// line's newline (or the end of the text on the last line).
    pub fn position_to_offset(&self, pos: Position) -> Option<usize> {
        let start = self.line_start(pos.line)?;
        let last = match self.starts.get(pos.line + 1) {
            Some(next) => next - 1,
            None => self.len,
        };
        let offset = start + pos.column;
        (offset <= last).then_some(offset)
    }
}

/// Resolves `offset` in `text` to a position, building the line table on the way.
///
/// Callers resolving many offsets against the same text should build a
/// [`LineOffsets`] once and call [`LineOffsets::offset_to_position`].
pub fn resolve_position(text: &str, offset: i64) -> Position {
    if offset <= 0 {
        return Position::default();
    }
    LineOffsets::build(text).offset_to_position(offset)
}
