//! Keyword and GNU-alternate-spelling classification.
//!
//! The donor lexer discriminates identifiers against its (much smaller)
//! keyword vocabulary with ordinary Rust `match` arms, relying on the
//! compiler's own jump-table / decision-tree codegen. C's vocabulary is
//! roughly twice the size once every GNU double-underscore spelling is
//! counted, and the design notes call this out explicitly: a linear
//! string-compare sweep is a measurable regression and must be avoided.
//! `phf::phf_map!` builds a perfect hash function over the whole table at
//! compile time, giving an O(len) (hash the lexeme once) lookup with no
//! per-entry branching.

use phf::phf_map;

use crate::token::TokenKind;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    // Standard C89/C99 keywords.
    "auto" => TokenKind::Auto,
    "break" => TokenKind::Break,
    "case" => TokenKind::Case,
    "char" => TokenKind::Char,
    "const" => TokenKind::Const,
    "continue" => TokenKind::Continue,
    "default" => TokenKind::Default,
    "do" => TokenKind::Do,
    "double" => TokenKind::Double,
    "else" => TokenKind::Else,
    "enum" => TokenKind::Enum,
    "extern" => TokenKind::Extern,
    "float" => TokenKind::Float,
    "for" => TokenKind::For,
    "goto" => TokenKind::Goto,
    "if" => TokenKind::If,
    "inline" => TokenKind::Inline,
    "int" => TokenKind::Int,
    "long" => TokenKind::Long,
    "register" => TokenKind::Register,
    "restrict" => TokenKind::Restrict,
    "return" => TokenKind::Return,
    "short" => TokenKind::Short,
    "signed" => TokenKind::Signed,
    "sizeof" => TokenKind::Sizeof,
    "static" => TokenKind::Static,
    "struct" => TokenKind::Struct,
    "switch" => TokenKind::Switch,
    "typedef" => TokenKind::Typedef,
    "typeof" => TokenKind::Typeof,
    "union" => TokenKind::Union,
    "unsigned" => TokenKind::Unsigned,
    "void" => TokenKind::Void,
    "volatile" => TokenKind::Volatile,
    "while" => TokenKind::While,
    "asm" => TokenKind::Asm,

    // C11 (supported subset).
    "_Alignas" => TokenKind::Alignas,
    "_Alignof" => TokenKind::Alignof,
    "_Atomic" => TokenKind::Atomic,
    "_Bool" => TokenKind::Bool,
    "_Complex" => TokenKind::Complex,
    "_Generic" => TokenKind::Generic,
    "_Noreturn" => TokenKind::Noreturn,
    "_Static_assert" => TokenKind::StaticAssert,
    "_Thread_local" => TokenKind::ThreadLocal,
    "_Nullable" => TokenKind::Nullable,
    "_Nonnull" => TokenKind::Nonnull,

    // GNU alternate spellings, mapped onto the same token as their
    // canonical keyword.
    "__alignof" => TokenKind::Alignof,
    "alignof" => TokenKind::Alignof,
    "__alignof__" => TokenKind::Alignof,
    "__asm" => TokenKind::Asm,
    "__asm__" => TokenKind::Asm,
    "__const" => TokenKind::Const,
    "__const__" => TokenKind::Const,
    "__complex__" => TokenKind::Complex,
    "__inline" => TokenKind::Inline,
    "__inline__" => TokenKind::Inline,
    "__int128" => TokenKind::Int128,
    "__nonnull" => TokenKind::Nonnull,
    "__nullable" => TokenKind::Nullable,
    "__restrict" => TokenKind::Restrict,
    "__restrict__" => TokenKind::Restrict,
    "__signed" => TokenKind::Signed,
    "__signed__" => TokenKind::Signed,
    "__thread" => TokenKind::ThreadLocal,
    "__typeof" => TokenKind::Typeof,
    "__typeof__" => TokenKind::Typeof,
    "__volatile" => TokenKind::Volatile,
    "__volatile__" => TokenKind::Volatile,
    "__label__" => TokenKind::Label,

    // GNU extension markers.
    "__attribute" => TokenKind::Attribute,
    "__attribute__" => TokenKind::Attribute,
    "__extension__" => TokenKind::Extension,
    "__real" => TokenKind::ComplexReal,
    "__real__" => TokenKind::ComplexReal,
    "__imag" => TokenKind::ComplexImag,
    "__imag__" => TokenKind::ComplexImag,
    "__builtin_va_arg" => TokenKind::BuiltinVaArg,
    "__builtin_offsetof" => TokenKind::BuiltinOffsetof,
    "__builtin_types_compatible_p" => TokenKind::BuiltinTypesCompatibleP,
};

/// Looks up `text` in the keyword table. A lexeme containing `$` never
/// matches, even if stripping it would coincidentally spell a keyword: the
/// grammar treats `$` as a plain identifier constituent and the keyword
/// vocabulary was never extended to cover `$`-bearing spellings (see the
/// open question in the design notes).
pub fn lookup(text: &str) -> Option<TokenKind> {
    if text.contains('$') {
        return None;
    }
    KEYWORDS.get(text).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_keyword() {
        assert_eq!(lookup("while"), Some(TokenKind::While));
    }

    #[test]
    fn test_c11_keyword() {
        assert_eq!(lookup("_Atomic"), Some(TokenKind::Atomic));
    }

    #[test]
    fn test_gnu_alternate_spelling_maps_to_canonical() {
        assert_eq!(lookup("__const"), Some(TokenKind::Const));
        assert_eq!(lookup("__const__"), Some(TokenKind::Const));
        assert_eq!(lookup("const"), Some(TokenKind::Const));
    }

    #[test]
    fn test_attribute_marker() {
        assert_eq!(lookup("__attribute__"), Some(TokenKind::Attribute));
    }

    #[test]
    fn test_non_keyword_misses() {
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("foobar"), None);
    }

    #[test]
    fn test_dollar_bearing_lexeme_never_matches() {
        assert_eq!(lookup("__const$"), None);
    }

    #[test]
    fn test_builtin_markers() {
        assert_eq!(lookup("__builtin_offsetof"), Some(TokenKind::BuiltinOffsetof));
        assert_eq!(
            lookup("__builtin_types_compatible_p"),
            Some(TokenKind::BuiltinTypesCompatibleP)
        );
    }
}
