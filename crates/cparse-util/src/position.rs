//! Source position tracking for the lexer's input cursor.
//!
//! This is a lighter-weight sibling of [`crate::span::Span`]: a `Span` is an
//! offset range keyed against a [`crate::span::FileId`] registered in a
//! [`crate::span::SourceMap`], which suits diagnostic rendering across a
//! pre-loaded set of files. A `Position` instead directly holds the file
//! name it came from (shared via `Rc<str>` so a `#line` directive that
//! repeats the current file name doesn't allocate) and is what a lexer
//! advances one byte/character at a time as it scans.

use std::rc::Rc;

/// A single point in a source file: file name, 1-based row and column, and
/// a 0-based byte offset.
///
/// Column resets to 1 on `\n`; `\r` advances the byte offset without moving
/// the column (it is treated as a non-printing byte, matching the newline
/// bookkeeping rule the cursor uses).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    file: Rc<str>,
    row: u32,
    column: u32,
    offset: usize,
}

impl Position {
    /// Creates the initial position for a fresh input buffer: row 1,
    /// column 1, offset 0.
    pub fn start(file: impl Into<Rc<str>>) -> Self {
        Self {
            file: file.into(),
            row: 1,
            column: 1,
            offset: 0,
        }
    }

    /// File name this position belongs to.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based row (line) number.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// 0-based byte offset into the input buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advances past one non-newline byte.
    pub(crate) fn advance_byte(&mut self) {
        self.offset += 1;
        self.column += 1;
    }

    /// Advances past a `\n`: bumps the row and resets the column, but
    /// still accounts for the byte itself in the offset.
    pub(crate) fn advance_newline(&mut self) {
        self.offset += 1;
        self.row += 1;
        self.column = 1;
    }

    /// Advances past a bare `\r` (not followed by `\n`): only the byte
    /// offset moves, matching the `#line`-directive line-ending rule.
    pub(crate) fn advance_bare_cr(&mut self) {
        self.offset += 1;
    }

    /// Applies a `#line ROW ["FILE"]` directive. If `file` names the
    /// current file, the existing `Rc<str>` is retained rather than
    /// allocating a new one, so repeated `#line` directives against the
    /// same header don't grow the number of distinct file-name
    /// allocations.
    pub fn rebase(&mut self, row: u32, file: Option<&str>) {
        self.row = row;
        self.column = 1;
        if let Some(name) = file {
            if name != &*self.file {
                self.file = Rc::from(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let p = Position::start("a.c");
        assert_eq!(p.file(), "a.c");
        assert_eq!(p.row(), 1);
        assert_eq!(p.column(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_advance_byte() {
        let mut p = Position::start("a.c");
        p.advance_byte();
        assert_eq!(p.column(), 2);
        assert_eq!(p.offset(), 1);
        assert_eq!(p.row(), 1);
    }

    #[test]
    fn test_advance_newline() {
        let mut p = Position::start("a.c");
        p.advance_byte();
        p.advance_newline();
        assert_eq!(p.row(), 2);
        assert_eq!(p.column(), 1);
        assert_eq!(p.offset(), 2);
    }

    #[test]
    fn test_advance_bare_cr() {
        let mut p = Position::start("a.c");
        p.advance_bare_cr();
        assert_eq!(p.row(), 1);
        assert_eq!(p.column(), 1);
        assert_eq!(p.offset(), 1);
    }

    #[test]
    fn test_rebase_same_file_shares_rc() {
        let mut p = Position::start("a.c");
        let before = p.file.clone();
        p.rebase(42, Some("a.c"));
        assert_eq!(p.row(), 42);
        assert_eq!(p.column(), 1);
        assert!(Rc::ptr_eq(&before, &p.file));
    }

    #[test]
    fn test_rebase_new_file() {
        let mut p = Position::start("a.c");
        p.rebase(10, Some("b.c"));
        assert_eq!(p.file(), "b.c");
        assert_eq!(p.row(), 10);
    }

    #[test]
    fn test_rebase_no_file_keeps_current() {
        let mut p = Position::start("a.c");
        p.rebase(5, None);
        assert_eq!(p.file(), "a.c");
        assert_eq!(p.row(), 5);
    }

    #[test]
    fn test_rebase_idempotent() {
        let mut p1 = Position::start("a.c");
        p1.rebase(42, Some("foo.c"));
        let mut p2 = Position::start("a.c");
        p2.rebase(42, Some("foo.c"));
        p2.rebase(42, Some("foo.c"));
        assert_eq!(p1.row(), p2.row());
        assert_eq!(p1.column(), p2.column());
        assert_eq!(p1.file(), p2.file());
    }
}
