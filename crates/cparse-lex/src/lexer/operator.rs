//! Operator and punctuator lexing.
//!
//! Each `lex_*` method is entered with the cursor on the character that
//! started the dispatch and is responsible for consuming however many
//! further characters its longest match requires.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_plus(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '+' => {
                self.cursor.advance();
                TokenKind::PlusPlus
            }
            '=' => {
                self.cursor.advance();
                TokenKind::PlusEq
            }
            _ => TokenKind::Plus,
        }
    }

    pub(crate) fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '-' => {
                self.cursor.advance();
                TokenKind::MinusMinus
            }
            '=' => {
                self.cursor.advance();
                TokenKind::MinusEq
            }
            '>' => {
                self.cursor.advance();
                TokenKind::Arrow
            }
            _ => TokenKind::Minus,
        }
    }

    pub(crate) fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            TokenKind::StarEq
        } else {
            TokenKind::Star
        }
    }

    pub(crate) fn lex_slash(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            TokenKind::SlashEq
        } else {
            TokenKind::Slash
        }
    }

    pub(crate) fn lex_percent(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            TokenKind::PercentEq
        } else {
            TokenKind::Percent
        }
    }

    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            TokenKind::EqEq
        } else {
            TokenKind::Eq
        }
    }

    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            TokenKind::NotEq
        } else {
            TokenKind::Bang
        }
    }

    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '=' => {
                self.cursor.advance();
                TokenKind::LtEq
            }
            '<' => {
                self.cursor.advance();
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    TokenKind::ShlEq
                } else {
                    TokenKind::Shl
                }
            }
            _ => TokenKind::Lt,
        }
    }

    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '=' => {
                self.cursor.advance();
                TokenKind::GtEq
            }
            '>' => {
                self.cursor.advance();
                if self.cursor.current_char() == '=' {
                    self.cursor.advance();
                    TokenKind::ShrEq
                } else {
                    TokenKind::Shr
                }
            }
            _ => TokenKind::Gt,
        }
    }

    pub(crate) fn lex_amp(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '&' => {
                self.cursor.advance();
                TokenKind::AmpAmp
            }
            '=' => {
                self.cursor.advance();
                TokenKind::AmpEq
            }
            _ => TokenKind::Amp,
        }
    }

    pub(crate) fn lex_pipe(&mut self) -> TokenKind {
        self.cursor.advance();
        match self.cursor.current_char() {
            '|' => {
                self.cursor.advance();
                TokenKind::PipePipe
            }
            '=' => {
                self.cursor.advance();
                TokenKind::PipeEq
            }
            _ => TokenKind::Pipe,
        }
    }

    pub(crate) fn lex_caret(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            TokenKind::CaretEq
        } else {
            TokenKind::Caret
        }
    }

    pub(crate) fn lex_tilde(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Tilde
    }

    /// C has no `::`; `:` is always a plain colon (ternary/label/bitfield
    /// separator are all resolved by the parser from this single token).
    pub(crate) fn lex_colon(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Colon
    }

    /// `.` is a plain dot unless followed by exactly `..`, forming the
    /// variadic ellipsis. C has no range-operator family, unlike the
    /// donor's `..`/`..=`.
    pub(crate) fn lex_dot(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1) == '.' {
            self.cursor.advance();
            self.cursor.advance();
            TokenKind::Ellipsis
        } else {
            TokenKind::Dot
        }
    }

    pub(crate) fn lex_hash(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char() == '#' {
            self.cursor.advance();
            TokenKind::HashHash
        } else {
            TokenKind::Hash
        }
    }
}
