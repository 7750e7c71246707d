//! `#line`/`#pragma`/`#ident` line-marker processing.
//!
//! By the time this lexer runs, preprocessing has already happened; the
//! only directives that still appear in its input are the position
//! markers a `cpp` pass leaves behind. `#line` (both the named form and
//! GCC's bare linemarker form, `# N "file"`) rebases [`Position`]; `#pragma`
//! and `#ident` lines are recognized and skipped without rebasing anything.

use cparse_util::DiagnosticCode;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Called with the cursor on a `#` that is the first non-whitespace
    /// byte of its line. Returns `true` if a directive was recognized and
    /// consumed (the caller should re-enter the scan loop), `false` if `#`
    /// should instead be lexed as an ordinary `Hash`/`HashHash` token.
    pub(crate) fn try_lex_directive(&mut self) -> bool {
        let snapshot = self.cursor.snapshot();
        self.cursor.advance(); // '#'
        self.skip_hspace();

        if self.cursor.current_char().is_ascii_digit() {
            self.finish_line_directive();
            return true;
        }

        let word_start = self.cursor.offset();
        while self.cursor.current_char().is_ascii_alphabetic() {
            self.cursor.advance();
        }
        let word = self.cursor.slice_str_from(word_start);

        match word {
            "line" => {
                self.skip_hspace();
                if !self.cursor.current_char().is_ascii_digit() {
                    self.report_error(
                        "expected a line number after '#line'",
                        DiagnosticCode::E_LEXER_INVALID_DIRECTIVE,
                    );
                    self.skip_to_eol();
                    return true;
                }
                self.finish_line_directive();
                true
            }
            "pragma" | "ident" => {
                self.skip_to_eol();
                true
            }
            _ => {
                self.cursor.restore(snapshot);
                false
            }
        }
    }

    fn skip_hspace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.advance();
        }
    }

    fn skip_to_eol(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '\n' {
            self.at_line_start = true;
            self.cursor.advance();
        }
    }

    /// Parses `digits hspace* ("file" hspace*)? (digits hspace*)* EOL`,
    /// rebases [`Position`], and discards any trailing integer fields
    /// (gcc's extra linemarker flags) without validating them.
    fn finish_line_directive(&mut self) {
        let digit_start = self.cursor.offset();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let row: u32 = self
            .cursor
            .slice_str_from(digit_start)
            .parse()
            .unwrap_or(1);
        self.skip_hspace();

        let mut file_name: Option<String> = None;
        if self.cursor.current_char() == '"' {
            self.cursor.advance();
            let name_start = self.cursor.offset();
            while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
                self.cursor.advance();
            }
            file_name = Some(self.cursor.slice_str_from(name_start).to_string());
            if self.cursor.current_char() == '"' {
                self.cursor.advance();
            }
            self.skip_hspace();
        }

        // Trailing gcc linemarker flags: further digit runs, ignored.
        while self.cursor.current_char().is_ascii_digit() {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            self.skip_hspace();
        }

        self.skip_to_eol();
        self.cursor.rebase_position(row, file_name.as_deref());
    }
}
