//! Position-tracked, read-only view over an input buffer.

/// A read-only cursor over a byte buffer.
///
/// Every slice handed out by the cursor borrows from the underlying buffer
/// for `'a`, so callers can keep the returned views after the cursor itself
/// is gone. The cursor never reads past the end of the buffer and never
/// allocates.
///
/// # Examples
///
/// ```
/// use uri_slice::Cursor;
///
/// let mut cursor = Cursor::new(b"http://example.com");
/// assert_eq!(cursor.take_while(|b| b.is_ascii_alphabetic()), b"http");
/// assert_eq!(cursor.next_byte(), Some(b':'));
/// assert!(cursor.has_prefix(b"//"));
/// assert_eq!(cursor.take_rest(), b"//example.com");
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the whole underlying buffer, including consumed bytes.
    #[must_use]
    pub const fn source(&self) -> &'a [u8] {
        self.buf
    }

    /// Returns the current offset into the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unconsumed bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns true if every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Returns the next byte without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns the next byte and advances past it.
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consumes the longest run of bytes satisfying `predicate`.
    ///
    /// The returned slice may be empty.
    pub fn take_while(&mut self, mut predicate: impl FnMut(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        let len = self.buf[start..]
            .iter()
            .position(|&b| !predicate(b))
            .unwrap_or(self.buf.len() - start);
        self.pos = start + len;
        &self.buf[start..self.pos]
    }

    /// Consumes bytes up to, not including, the first byte satisfying
    /// `predicate`, or up to the end of the buffer if none does.
    pub fn take_until(&mut self, mut predicate: impl FnMut(u8) -> bool) -> &'a [u8] {
        self.take_while(|b| !predicate(b))
    }

    /// Consumes and returns everything left in the buffer.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.buf[self.pos..];
        self.pos = self.buf.len();
        rest
    }

    /// Returns true if the unconsumed bytes start with `literal`.
    #[must_use]
    pub fn has_prefix(&self, literal: &[u8]) -> bool {
        self.buf[self.pos..].starts_with(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn next_byte_stops_at_end() {
        let mut cursor = Cursor::new(b"a");
        assert_eq!(cursor.next_byte(), Some(b'a'));
        assert_eq!(cursor.next_byte(), None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn empty_buffer() {
        let mut cursor = Cursor::new(b"");
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.take_while(|_| true), b"");
        assert_eq!(cursor.take_until(|_| true), b"");
        assert_eq!(cursor.take_rest(), b"");
        assert!(cursor.has_prefix(b""));
        assert!(!cursor.has_prefix(b"/"));
    }

    #[test]
    fn take_while_may_be_empty() {
        let mut cursor = Cursor::new(b":rest");
        assert_eq!(cursor.take_while(|b| b.is_ascii_alphanumeric()), b"");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn take_while_consumes_to_end() {
        let mut cursor = Cursor::new(b"abc");
        assert_eq!(cursor.take_while(|b| b.is_ascii_alphabetic()), b"abc");
        assert!(cursor.is_empty());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn take_until_stops_before_match() {
        let mut cursor = Cursor::new(b"host/path");
        assert_eq!(cursor.take_until(|b| b == b'/'), b"host");
        assert_eq!(cursor.peek(), Some(b'/'));
        assert_eq!(cursor.remaining(), 5);
    }

    #[test]
    fn take_until_without_match_takes_all() {
        let mut cursor = Cursor::new(b"host");
        assert_eq!(cursor.take_until(|b| b == b'/'), b"host");
        assert!(cursor.is_empty());
    }

    #[test]
    fn has_prefix_longer_than_remaining() {
        let mut cursor = Cursor::new(b"x/");
        cursor.next_byte();
        assert!(cursor.has_prefix(b"/"));
        assert!(!cursor.has_prefix(b"//"));
    }

    #[test]
    fn views_outlive_cursor() {
        let input = b"scheme:rest";
        let head = {
            let mut cursor = Cursor::new(input);
            cursor.take_until(|b| b == b':')
        };
        assert_eq!(head, b"scheme");
    }
}
