//! Lexical analysis for preprocessed C11 source, plus the GNU extensions
//! listed in `SPEC_FULL.md` §1.
//!
//! The lexer assumes its input has already been through a C preprocessor:
//! macro expansion, `#include`, and conditional compilation are not its
//! concern. What remains for it to handle are the position-marker
//! directives a preprocessor still leaves in its output (`#line`,
//! `#pragma`, `#ident`, see [`lexer::directive`]), plus the lexical
//! grammar itself — identifiers and keywords, numeric/string/character
//! literals, and the ~50 C punctuators.
//!
//! The entry point is [`Lexer`], which is both a pull-based scanner
//! (`next_token`/`peek_token`) and an [`Iterator`] over [`Token`]s, ending
//! at (but not including) the first [`TokenKind::Eof`].
//!
//! Unlike the donor framework this crate was adapted from, a `Lexer` does
//! not reach into a global symbol table: it owns its own [`NameTable`]
//! (`cparse_util::name`), since a parser may run many lexers (one per
//! translation unit) concurrently without sharing interner state.

pub mod cursor;
mod keyword;
mod lexer;
pub mod token;
pub mod unicode;

pub use cparse_util::{Name, NameTable};
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{
    CharLiteral, ClangVersion, FloatLiteral, IntegerBase, IntegerLiteral, StringLiteral, Token,
    TokenKind,
};

#[cfg(test)]
mod edge_cases;
