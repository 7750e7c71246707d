//! Instance-owned backing store for [`super::Name`].
//!
//! This replaces the donor crate's `StringTable` (a `LazyLock<DashMap<..>>`
//! global, built for concurrent access from arbitrary threads) with a plain
//! `FxHashMap` keyed by the owned string plus a `Vec` for key-to-string
//! resolution. Single-owner, single-threaded, no atomics, no locking —
//! exactly what a per-parse table needs and nothing more.

use rustc_hash::FxHashMap;

use super::Name;

/// Owns the interned strings for one parse.
///
/// A fresh `NameTable` is created per [`crate::Lexer`](../../cparse_lex/struct.Lexer.html)-style
/// consumer; names from two different tables must never be compared.
#[derive(Debug, Default)]
pub struct NameTable {
    strings: Vec<Box<str>>,
    index: FxHashMap<Box<str>, u32>,
}

impl NameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            strings: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Interns `text`, returning its `Name`. Repeated calls with the same
    /// text return the same `Name` (invariant 4 of the lexer's testable
    /// properties: identical lexemes map to the same id within one parse).
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&idx) = self.index.get(text) {
            return Name(idx);
        }

        let idx = self.strings.len() as u32;
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.index.insert(boxed, idx);
        Name(idx)
    }

    /// Returns the next id this table would assign, without interning
    /// anything. This backs the lexer's `fresh-name()` callback surface
    /// when a caller wants an id reservation ahead of the actual text
    /// (e.g. synthetic identifiers introduced by later phases).
    pub fn next_id(&self) -> u32 {
        self.strings.len() as u32
    }

    /// Resolves a previously interned `Name` back to its text.
    ///
    /// # Panics
    ///
    /// Panics if `name` was not produced by this table.
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
