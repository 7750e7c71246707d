//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch table.

use cparse_util::{DiagnosticBuilder, DiagnosticCode, Handler, Name, NameTable, Position, Span};

use crate::cursor::Cursor;
use crate::keyword;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer for preprocessed C11 (plus the supported GNU extensions) source.
///
/// The lexer owns a per-parse [`NameTable`] (see `cparse_util::name`) rather
/// than reaching into a global interner, and takes a caller-supplied
/// predicate to decide whether an identifier names a type: the grammar's
/// identifier/type-name ambiguity cannot be resolved by the lexer alone, so
/// the parser feeds typedef declarations back in through this callback (see
/// `SPEC_FULL.md` §4.4 and the design notes).
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic sink. `Handler`'s methods take `&self` (it is
    /// `RefCell`-backed internally), so the lexer only needs a shared
    /// reference.
    pub(crate) handler: &'a Handler,

    /// Per-parse identifier interner.
    pub names: NameTable,

    /// Callback deciding whether a given interned name currently denotes a
    /// typedef'd type, fed by the parser as it processes declarations.
    is_type_name: Box<dyn FnMut(Name) -> bool + 'a>,

    /// True if no non-whitespace byte has been seen yet on the current
    /// physical line. `#line`/`#pragma`/`#ident` directives are only
    /// recognized when `#` is the first such byte on its line.
    pub(crate) at_line_start: bool,

    /// One token of lookahead, used by parsers that need to peek before
    /// committing to a production.
    peeked: Option<Token>,

    /// The most recently emitted token, exposed for the parser's error
    /// reporter ("the symbol X does not fit here"). Only updated by
    /// [`Lexer::next_token`], never by the internal directive-skipping
    /// loop inside `scan_token`, so a `#line` directive never causes the
    /// same token to be recorded twice.
    last_token: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source bytes.
    ///
    /// `is_type_name` is consulted every time an identifier is lexed that
    /// isn't a keyword; it should answer according to the set of typedef
    /// names visible at the parser's current scope.
    pub fn new(
        source: &'a [u8],
        file: impl Into<std::rc::Rc<str>>,
        handler: &'a Handler,
        is_type_name: Box<dyn FnMut(Name) -> bool + 'a>,
    ) -> Self {
        Self {
            cursor: Cursor::new(source, file),
            handler,
            names: NameTable::new(),
            is_type_name,
            at_line_start: true,
            peeked: None,
            last_token: None,
        }
    }

    /// The most recently emitted token, or `None` before the first call to
    /// [`Lexer::next_token`].
    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }

    /// Formats and emits a syntax-error diagnostic using the most recently
    /// emitted token, for a parser that has rejected it in its current
    /// production. A no-op (beyond the emit) if called before any token has
    /// been produced.
    pub fn parse_error(&self) {
        let Some(token) = self.last_token.as_ref() else {
            return;
        };
        let span = Span::new(
            token.position.offset(),
            token.position.offset() + token.length,
            token.position.row(),
            token.position.column(),
        );
        DiagnosticBuilder::error(format!(
            "Lexical Error !\nThe symbol {:?} does not fit here.",
            token.kind
        ))
        .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
        .span(span)
        .emit(self.handler);
    }

    /// Returns the next token, without consuming it. A second call before
    /// [`Lexer::next_token`] returns the same token.
    pub fn peek_token(&mut self) -> &Token {
        if self.peeked.is_none() {
            self.peeked = Some(self.scan_token());
        }
        self.peeked.as_ref().unwrap()
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization: it skips whitespace
    /// (and consumes any line-marker directives in between), then
    /// dispatches to the appropriate lexing routine based on the current
    /// character.
    pub fn next_token(&mut self) -> Token {
        let token = self.peeked.take().unwrap_or_else(|| self.scan_token());
        self.last_token = Some(token.clone());
        token
    }

    fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            let start = self.cursor.position().clone();
            let was_at_line_start = self.at_line_start;
            self.at_line_start = false;

            if self.cursor.is_at_end() {
                return Token::new(TokenKind::Eof, start, 0);
            }

            if was_at_line_start && self.cursor.current_char() == '#' {
                if self.try_lex_directive() {
                    // Re-lex from the rebased position; the directive line
                    // itself never produces a token.
                    continue;
                }
            }

            let kind = self.dispatch();
            let length = self.cursor.offset() - start.offset();
            return Token::new(kind, start, length);
        }
    }

    fn dispatch(&mut self) -> TokenKind {
        let c = self.cursor.current_char();

        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '?' => self.single(TokenKind::Question),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '%' => self.lex_percent(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_amp(),
            '|' => self.lex_pipe(),
            ':' => self.lex_colon(),
            '.' => self.lex_dot(),
            '^' => self.lex_caret(),
            '~' => self.lex_tilde(),
            '#' => self.lex_hash(),
            '"' => self.lex_string(false),
            '\'' => self.lex_char(false),
            'L' if matches!(self.cursor.peek_char(1), '"' | '\'') => {
                self.cursor.advance();
                if self.cursor.current_char() == '"' {
                    self.lex_string(true)
                } else {
                    self.lex_char(true)
                }
            }
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.report_error(
                    format!("The character {} does not fit here.", c),
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                );
                self.cursor.advance();
                TokenKind::Invalid
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Reports a lexical error spanning from the start of the current token
    /// to the current cursor position.
    pub(crate) fn report_error(&mut self, message: impl Into<String>, code: DiagnosticCode) {
        self.report_error_from(self.cursor.position().clone(), message, code);
    }

    pub(crate) fn report_error_from(
        &mut self,
        start: Position,
        message: impl Into<String>,
        code: DiagnosticCode,
    ) {
        let span = Span::new(
            start.offset(),
            self.cursor.offset(),
            start.row(),
            start.column(),
        );
        DiagnosticBuilder::error(format!("Lexical Error !\n{}", message.into()))
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Looks up (or interns) the name for `text` and asks the parser-fed
    /// predicate whether it currently names a type.
    pub(crate) fn classify_identifier(&mut self, text: &str) -> TokenKind {
        if let Some(kind) = keyword::lookup(text) {
            return kind;
        }
        let name = self.names.intern(text);
        if (self.is_type_name)(name) {
            TokenKind::TypeIdent(name)
        } else {
            TokenKind::Identifier(name)
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
