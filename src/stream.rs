/// The cursor contract parsers operate through.
///
/// A stream is a seekable character source: it exposes its current offset,
/// can be repositioned to any offset previously obtained from `offset`, and
/// yields characters one at a time. Offsets are opaque — the only valid
/// `seek` targets are values returned by `offset` on the same stream.
///
/// Backtracking is implemented by recording an offset and seeking back to
/// it, never by cloning the input, so the memory cost of lookahead is
/// independent of its depth.
pub trait Stream {
    /// The current offset. Opaque, monotonically increasing with reads.
    fn offset(&self) -> usize;

    /// Reposition the stream. `target` must have been produced by
    /// `offset`; anything else is a contract violation.
    fn seek(&mut self, target: usize);

    /// The character at the current offset, without consuming it.
    /// `None` at end of stream.
    fn peek(&self) -> Option<char>;

    /// Read one character, advancing the offset. `None` at end of stream.
    fn read(&mut self) -> Option<char>;

    /// Bulk-read the characters between two previously obtained offsets,
    /// restoring the current offset afterwards. Used for error-text
    /// extraction and consumed-text capture.
    fn read_span(&mut self, start: usize, end: usize) -> String {
        let saved = self.offset();
        self.seek(start);
        let mut text = String::new();
        while self.offset() < end {
            match self.read() {
                Some(c) => text.push(c),
                None => break,
            }
        }
        self.seek(saved);
        text
    }

    /// Whether the stream is at its end.
    fn at_end(&self) -> bool {
        self.peek().is_none()
    }
}
