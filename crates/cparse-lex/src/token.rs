//! The C token type.
//!
//! A [`Token`] pairs a [`TokenKind`] with the `(Position, Length)` pair the
//! spec requires every token to carry: the starting source position and
//! the number of input bytes the lexeme consumed. `TokenKind` itself is a
//! plain, `Position`-free tagged union, matching the donor lexer's own
//! split between a position-tracking `Lexer` and a position-free `Token`.

use cparse_util::{Name, Position};

/// Which base an integer literal was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegerBase {
    Dec,
    Oct,
    Hex,
}

/// A decoded integer constant.
///
/// `value` is a best-effort `u128` magnitude; `digits` retains the raw
/// (suffix-stripped, underscore-free is not a C concept so none to strip)
/// digit text so a later phase can re-derive arbitrary precision if the
/// fixed-width value overflowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub value: u128,
    pub digits: String,
    pub base: IntegerBase,
    pub unsigned: bool,
    pub long: bool,
    pub long_long: bool,
    pub imaginary: bool,
}

/// A decoded floating-point constant.
///
/// `value` is the nearest `f64`; `raw` is the exact source text, since
/// widening to `long double` precision is left to a later phase.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatLiteral {
    pub value: f64,
    pub raw: String,
    pub is_float: bool,
    pub is_long_double: bool,
    pub imaginary: bool,
}

/// A decoded character constant. Ordinary `'a'` constants carry exactly
/// one code point; multi-character constants (`'ab'`) carry more than one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharLiteral {
    pub codepoints: Vec<u32>,
    pub wide: bool,
}

/// A decoded string constant. Adjacent-string concatenation is left to the
/// parser; each `"..."` token is decoded independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub bytes: Vec<u8>,
    pub wide: bool,
}

/// A clang version-triple literal (`major.minor.patch`), emitted by
/// clang's preprocessor in some version-check contexts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClangVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// The tag and payload of one token. See `SPEC_FULL.md` §3 for the
/// rationale behind each family.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Punctuation / operators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Question,
    Dot,
    Arrow,
    Ellipsis,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    AmpAmp,
    PipePipe,
    Shl,
    Shr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    Hash,
    HashHash,

    // Keywords (standard)
    Auto,
    Break,
    Case,
    Char,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extern,
    Float,
    For,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Register,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Typedef,
    Typeof,
    Union,
    Unsigned,
    Void,
    Volatile,
    While,
    Asm,
    Int128,
    Label,

    // Keywords (C11 supported subset)
    Alignas,
    Alignof,
    Atomic,
    Bool,
    Complex,
    Generic,
    Noreturn,
    StaticAssert,
    ThreadLocal,
    Nullable,
    Nonnull,

    // GNU extension markers
    Attribute,
    Extension,
    ComplexReal,
    ComplexImag,
    BuiltinVaArg,
    BuiltinOffsetof,
    BuiltinTypesCompatibleP,

    // Identifiers
    Identifier(Name),
    TypeIdent(Name),

    // Literals
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    Char(CharLiteral),
    Str(StringLiteral),
    ClangVersion(ClangVersion),

    /// Lexically malformed input that was still assigned some token shape
    /// so the lex loop can make progress after reporting a diagnostic.
    Invalid,

    Eof,
}

/// A single lexed token: its kind plus the source range it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, length: usize) -> Self {
        Self {
            kind,
            position,
            length,
        }
    }
}
