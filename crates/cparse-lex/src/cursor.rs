//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source bytes. C source, after preprocessing, is
//! defined over the basic execution character set; this cursor treats every
//! byte as its own Latin-1 code point rather than decoding UTF-8, so a
//! single `advance()` always consumes exactly one byte and `peek_char`
//! never needs to look past a multi-byte sequence.

use cparse_util::Position;

/// A cursor for traversing source code byte by byte.
///
/// The cursor owns the running [`Position`] (file, row, column, byte
/// offset) and provides methods for advancing, peeking ahead, and slicing
/// out lexemes. `\r\n` is folded into a single line break; a bare `\r` not
/// followed by `\n` advances the byte offset without moving the row or
/// column, so it never silently swallows a later column (see
/// `SPEC_FULL.md` §4.1).
///
/// # Example
///
/// ```
/// use cparse_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"int x;", "a.c");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Running position (file, row, column, byte offset).
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source bytes.
    ///
    /// # Arguments
    ///
    /// * `source` - The source bytes to traverse
    /// * `file` - The file name to attribute positions to
    pub fn new(source: &'a [u8], file: impl Into<std::rc::Rc<str>>) -> Self {
        Self {
            source,
            position: Position::start(file),
        }
    }

    /// Returns the byte at the given offset from the current position, or
    /// `None` past the end of the source.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position.offset() + offset).copied()
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the character at the given byte offset from the current
    /// position, treating each byte as its own Latin-1 code point. Returns
    /// `'\0'` past the end of the source.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.peek_byte(offset).map(|b| b as char).unwrap_or('\0')
    }

    /// Returns the character at the current position, or `'\0'` at end of
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"abc", "a.c");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Advances the cursor by one byte, folding `\r\n` into a single line
    /// break and treating a lone `\r` as a silent byte (offset advances,
    /// row/column do not) pending a possible following `\n`.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"ab", "a.c");
    /// assert_eq!(cursor.current_char(), 'a');
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'b');
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        match self.current_byte() {
            None => {}
            Some(b'\r') => self.position.advance_bare_cr(),
            Some(b'\n') => self.position.advance_newline(),
            Some(_) => self.position.advance_byte(),
        }
    }

    /// Advances the cursor by the given number of bytes.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"a", "a.c");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.position.offset() >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"=>", "a.c");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace bytes: space, tab, newline, carriage return,
    /// vertical tab, and form feed. Does not skip comments.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"  \t\nint", "a.c");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'i');
    /// ```
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current_byte(), Some(b) if b.is_ascii_whitespace()) {
            self.advance();
        }
    }

    /// Returns the current row (1-based).
    pub fn row(&self) -> u32 {
        self.position.row()
    }

    /// Returns the current column (1-based).
    pub fn column(&self) -> u32 {
        self.position.column()
    }

    /// Returns the current byte offset into the source.
    pub fn offset(&self) -> usize {
        self.position.offset()
    }

    /// Returns the running position. Cloned into each [`crate::Token`] that
    /// starts here.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Rebases the running position, as directed by a `#line` directive.
    pub fn rebase_position(&mut self, row: u32, file: Option<&str>) {
        self.position.rebase(row, file);
    }

    /// Returns the raw bytes of the source from `start` to the current
    /// offset.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"int x", "a.c");
    /// let start = cursor.offset();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), b"int");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position.offset()]
    }

    /// Returns the source text from `start` to the current offset as a
    /// `str`. Only valid for lexemes known to be pure ASCII, such as
    /// identifiers and keywords; other lexeme kinds (string/char literal
    /// bodies) may contain non-UTF-8 Latin-1 bytes and must use
    /// [`Cursor::slice_from`] instead.
    pub fn slice_str_from(&self, start: usize) -> &'a str {
        std::str::from_utf8(self.slice_from(start))
            .expect("slice_str_from called on a non-ASCII lexeme")
    }

    /// Returns the source bytes from the current position to the end.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position.offset()..]
    }

    /// Returns the full source byte slice.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// # Example
    ///
    /// ```
    /// use cparse_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"int x", "a.c");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance_n(3);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.current_char(), 'i');
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position.clone(),
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Debug)]
pub struct CursorSnapshot {
    position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new(b"int x;", "a.c");
        assert_eq!(cursor.current_char(), 'i');
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new(b"abc", "a.c");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_latin1_high_byte_roundtrips_as_char() {
        let mut cursor = Cursor::new(&[0xE9, b'a'], "a.c");
        assert_eq!(cursor.current_char(), '\u{e9}');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new(b"abc", "a.c");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_is_at_end() {
        let mut cursor = Cursor::new(b"a", "a.c");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new(b"=>", "a.c");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(b"  \t\n  int", "a.c");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), 'i');
    }

    #[test]
    fn test_skip_whitespace_only() {
        let mut cursor = Cursor::new(b"   ", "a.c");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_row_column_tracking() {
        let mut cursor = Cursor::new(b"line1\nline2\nline3", "a.c");
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 1);

        cursor.advance_n(5); // "line1"
        assert_eq!(cursor.column(), 6);

        cursor.advance(); // '\n'
        assert_eq!(cursor.row(), 2);
        assert_eq!(cursor.column(), 1);

        cursor.advance_n(5); // "line2"
        cursor.advance(); // '\n'
        assert_eq!(cursor.row(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_crlf_counts_as_one_line_break() {
        let mut cursor = Cursor::new(b"a\r\nb", "a.c");
        cursor.advance(); // 'a'
        assert_eq!(cursor.row(), 1);
        cursor.advance(); // '\r'
        cursor.advance(); // '\n'
        assert_eq!(cursor.row(), 2);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_bare_cr_does_not_advance_row() {
        let mut cursor = Cursor::new(b"a\rb", "a.c");
        cursor.advance(); // 'a'
        let row_before = cursor.row();
        cursor.advance(); // '\r', lone
        assert_eq!(cursor.row(), row_before);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new(b"int x = 42;", "a.c");
        let start = cursor.offset();
        cursor.advance_n(3);
        assert_eq!(cursor.slice_str_from(start), "int");

        let start2 = cursor.offset();
        cursor.advance(); // skip space
        cursor.advance(); // 'x'
        assert_eq!(cursor.slice_str_from(start2), " x");
    }

    #[test]
    fn test_remaining() {
        let mut cursor = Cursor::new(b"int x = 42;", "a.c");
        assert_eq!(cursor.remaining(), b"int x = 42;");
        cursor.advance_n(4);
        assert_eq!(cursor.remaining(), b"x = 42;");
        cursor.advance_n(7);
        assert_eq!(cursor.remaining(), b"");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new(b"int x = 42;", "a.c");
        let snapshot = cursor.snapshot();

        cursor.advance_n(6); // "int x "
        assert_eq!(cursor.current_char(), '=');

        cursor.restore(snapshot);
        assert_eq!(cursor.current_char(), 'i');
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_n() {
        let mut cursor = Cursor::new(b"abcdef", "a.c");
        cursor.advance_n(3);
        assert_eq!(cursor.current_char(), 'd');
        cursor.advance_n(10); // More than remaining
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new(b"", "a.c");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_rebase_position_on_line_directive() {
        let mut cursor = Cursor::new(b"int x;", "a.c");
        cursor.advance_n(4);
        cursor.rebase_position(100, Some("b.h"));
        assert_eq!(cursor.row(), 100);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.position().file(), "b.h");
    }
}
