//! Shared infrastructure for the cparse compiler framework.
//!
//! `cparse-util` carries the pieces every phase of the framework needs but
//! none should reimplement: interned identifier names, source positions and
//! spans, a diagnostic builder/handler, a generic typed index vector, and
//! this crate's structured error types.
//!
//! Nothing here is lexer-specific. `cparse-lex` depends on this crate for
//! [`name`], [`position`], and [`diagnostic`]; later phases (parser,
//! semantic analysis) are expected to depend on the same foundation rather
//! than growing their own.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod name;
pub mod position;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{
    DiagnosticError, DiagnosticResult, IndexVecError, IndexVecResult, NameError, NameResult,
    SourceMapError, SourceMapResult,
};
pub use index_vec::{Idx, IndexVec};
pub use name::{Name, NameTable};
pub use position::Position;
pub use span::{FileId, SourceFile, SourceMap, Span};
