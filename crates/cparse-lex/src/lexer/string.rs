//! String and character literal lexing.
//!
//! Handles narrow and wide (`L`-prefixed) string and character constants,
//! including multi-character constants (`'ab'`) and the full escape
//! grammar: simple escapes, octal escapes (1-3 digits), hex escapes
//! (`\xh+`, unbounded digit run per C11), and universal character names
//! (`\uNNNN`, `\UNNNNNNNN`), which are recognized and then rejected since
//! this lexer does not resolve them to real code points (see
//! `SPEC_FULL.md` §4.2 rule 20).

use cparse_util::DiagnosticCode;

use crate::token::{CharLiteral, StringLiteral, TokenKind};
use crate::unicode::parse_hex_codepoint;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal. `wide` is true when a `L` prefix preceded
    /// the opening quote.
    pub fn lex_string(&mut self, wide: bool) -> TokenKind {
        self.cursor.advance(); // opening quote

        let mut bytes = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    "unterminated string literal",
                    DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                );
                break;
            }

            let c = self.cursor.current_char();
            if c == '"' {
                self.cursor.advance();
                break;
            }
            if c == '\n' {
                self.report_error(
                    "unterminated string literal",
                    DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                );
                break;
            }
            if c == '\\' {
                self.cursor.advance();
                if let Some(value) = self.parse_escape(true) {
                    bytes.push(value);
                }
            } else {
                bytes.push(c as u8);
                self.cursor.advance();
            }
        }

        TokenKind::Str(StringLiteral { bytes, wide })
    }

    /// Lexes a character constant, narrow or wide. Accepts any number of
    /// characters between the quotes (`'a'`, `'ab'`, ...) per C's
    /// multi-character constant support.
    pub fn lex_char(&mut self, wide: bool) -> TokenKind {
        self.cursor.advance(); // opening quote

        if self.cursor.current_char() == '\'' {
            self.report_error(
                "empty character constant",
                DiagnosticCode::E_LEXER_EMPTY_CHAR_LITERAL,
            );
            self.cursor.advance();
            return TokenKind::Char(CharLiteral {
                codepoints: Vec::new(),
                wide,
            });
        }

        let mut codepoints = Vec::new();
        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                self.report_error(
                    "unterminated character constant",
                    DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
                );
                break;
            }

            let c = self.cursor.current_char();
            if c == '\'' {
                self.cursor.advance();
                break;
            }
            if c == '\\' {
                self.cursor.advance();
                if let Some(value) = self.parse_escape(false) {
                    codepoints.push(value as u32);
                }
            } else {
                codepoints.push(c as u32);
                self.cursor.advance();
            }
        }

        TokenKind::Char(CharLiteral { codepoints, wide })
    }

    /// Parses one escape sequence (the cursor sits just past the
    /// backslash). `in_string` only affects which UCN diagnostic is
    /// reported; the decoding itself is shared with char-literal lexing.
    fn parse_escape(&mut self, in_string: bool) -> Option<u8> {
        if self.cursor.is_at_end() {
            self.report_error(
                "unterminated escape sequence",
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            );
            return None;
        }

        let c = self.cursor.current_char();
        match c {
            'n' => {
                self.cursor.advance();
                Some(b'\n')
            }
            't' => {
                self.cursor.advance();
                Some(b'\t')
            }
            'r' => {
                self.cursor.advance();
                Some(b'\r')
            }
            'a' => {
                self.cursor.advance();
                Some(0x07)
            }
            'b' => {
                self.cursor.advance();
                Some(0x08)
            }
            'f' => {
                self.cursor.advance();
                Some(0x0C)
            }
            'v' => {
                self.cursor.advance();
                Some(0x0B)
            }
            '\\' => {
                self.cursor.advance();
                Some(b'\\')
            }
            '"' => {
                self.cursor.advance();
                Some(b'"')
            }
            '\'' => {
                self.cursor.advance();
                Some(b'\'')
            }
            '?' => {
                self.cursor.advance();
                Some(b'?')
            }
            '0'..='7' => {
                let mut value: u32 = 0;
                let mut count = 0;
                while count < 3 && matches!(self.cursor.current_char(), '0'..='7') {
                    value = value * 8 + (self.cursor.current_char() as u32 - '0' as u32);
                    self.cursor.advance();
                    count += 1;
                }
                Some((value & 0xFF) as u8)
            }
            'x' => {
                self.cursor.advance();
                let mut value: u32 = 0;
                let mut count = 0;
                while self.cursor.current_char().is_ascii_hexdigit() {
                    value = value
                        .wrapping_mul(16)
                        .wrapping_add(self.cursor.current_char().to_digit(16).unwrap());
                    self.cursor.advance();
                    count += 1;
                }
                if count == 0 {
                    self.report_error(
                        "Invalid escape sequence",
                        DiagnosticCode::E_LEXER_INVALID_ESCAPE,
                    );
                    return None;
                }
                Some((value & 0xFF) as u8)
            }
            'u' | 'U' => {
                let digit_count = if c == 'u' { 4 } else { 8 };
                self.cursor.advance();
                let start = self.cursor.offset();
                let mut seen = 0;
                while seen < digit_count && self.cursor.current_char().is_ascii_hexdigit() {
                    self.cursor.advance();
                    seen += 1;
                }
                let hex = self.cursor.slice_str_from(start);
                let _ = parse_hex_codepoint(hex);
                let (code, message) = if in_string {
                    (
                        DiagnosticCode::E_LEXER_UCN_IN_STRING_UNSUPPORTED,
                        "Universal character names in string literals are unsupported",
                    )
                } else {
                    (
                        DiagnosticCode::E_LEXER_UCN_UNSUPPORTED,
                        "Universal character names are unsupported",
                    )
                };
                self.report_error(message, code);
                None
            }
            _ => {
                self.cursor.advance();
                self.report_error("Invalid escape sequence", DiagnosticCode::E_LEXER_INVALID_ESCAPE);
                None
            }
        }
    }
}
