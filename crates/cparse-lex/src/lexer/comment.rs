//! Whitespace skipping.
//!
//! Comment stripping is a preprocessor responsibility, not this lexer's:
//! the input here is already-preprocessed C, so a stray `/*` or `//` is
//! ordinary source text and lexes as plain punctuator tokens like anything
//! else.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips run-of-the-mill whitespace, tracking whether a newline has
    /// been crossed so directive detection (`#` at the start of a line)
    /// stays correct across blank lines.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' => {
                    self.cursor.advance();
                }
                '\n' => {
                    self.at_line_start = true;
                    self.cursor.advance();
                }
                '\r' => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }
}
