/// Converts increasing byte indices into char offsets in one pass.
///
/// The regex engine reports byte indices; highlight offsets are counted in
/// chars. Since matches arrive in document order, the cursor only ever counts
/// the chars between the previous index and the next one.
pub struct CharCursor<'a> {
    s: &'a str,
    /// Byte index reached so far.
    byte: usize,
    /// Chars in `s[..byte]`.
    chars: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            byte: 0,
            chars: 0,
        }
    }

    /// Advances to `byte` and returns the char offset there.
    ///
    /// Indices behind the cursor, past the end, or off a char boundary leave
    /// the cursor where it is.
    pub fn advance_to(&mut self, byte: usize) -> usize {
        if byte > self.byte
            && let Some(skipped) = self.s.get(self.byte..byte)
        {
            self.chars += skipped.chars().count();
            self.byte = byte;
        }
        self.chars
    }
}
