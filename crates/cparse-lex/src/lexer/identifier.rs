//! Identifier and keyword lexing.

use crate::token::TokenKind;
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword, or GNU alternate spelling.
    ///
    /// Identifiers start with a letter or underscore, followed by
    /// alphanumeric characters, underscores, or (as a GNU extension) `$`.
    /// After reading the lexeme, checks it against the keyword table before
    /// falling back to interning it as a plain identifier.
    pub fn lex_identifier(&mut self) -> TokenKind {
        let start = self.cursor.offset();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_str_from(start);
        self.classify_identifier(text)
    }
}
