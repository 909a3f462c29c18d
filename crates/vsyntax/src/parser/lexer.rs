//! Lexer for V source code.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! The actual decisions are made by the stateful [`Scanner`](super::scanner::Scanner); this
//! module drives it to completion and owns the lexical primitives shared with the parser.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive unrecognized characters into single `Garbage` tokens rather
//! than producing one error per character. This keeps the token stream manageable for malformed input.

use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;
use super::scanner::Scanner;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

pub(crate) fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for token in Scanner::new(source) {
        if token.kind == SyntaxKind::Garbage
            && let Some(prev) = tokens.last_mut()
            && prev.kind == SyntaxKind::Garbage
            && prev.span.end() == token.span.start()
        {
            prev.span = prev.span.cover(token.span);
            continue;
        }
        tokens.push(token);
    }
    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// Type names that are identifiers lexically but name builtin types.
pub const BUILTIN_TYPES: &[&str] = &[
    "voidptr",
    "byteptr",
    "charptr",
    "i8",
    "i16",
    "i32",
    "int",
    "i64",
    "isize",
    "byte",
    "u8",
    "u16",
    "u32",
    "u64",
    "usize",
    "f32",
    "f64",
    "char",
    "bool",
    "string",
    "rune",
    "array",
    "map",
    "chan",
    "size_t",
    "float_literal",
    "int_literal",
    "thread",
    "any",
    "IError",
];

pub fn is_builtin_type(text: &str) -> bool {
    BUILTIN_TYPES.contains(&text)
}
