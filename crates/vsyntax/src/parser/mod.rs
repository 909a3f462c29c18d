//! Parser infrastructure for V.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when building tree nodes
//! - Stateful scanning: the [`scanner`] decides string parts, interpolation, directives and
//!   which line breaks terminate statements, so the grammar never looks at raw newlines
//! - Trivia buffering: whitespace and comments are collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary operators, calls and selectors retroactively wrap their
//!   left operand
//! - Explicit recovery sets: per-production sets decide when to bail and when to consume
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic and leave a zero-width `Missing` node
//! 3. Recovery sets define synchronization points per production (statement ends,
//!    list separators, closing delimiters)
//! 4. Two statements on one line get a `Missing` terminator between them
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;
pub mod scanner;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod scanner_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{Expr, Item, SourceFile, Stmt, Type};

pub use core::{DEFAULT_RECURSION_FUEL, Parser};

pub(crate) use grammar::infix_binding_power;

use rowan::GreenNode;

use crate::PassResult;
use crate::tree::{self, ErrorNode, LineIndex};
use lexer::lex;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// `ERROR` and `MISSING` nodes in the tree mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
}

impl Parse {
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> SourceFile {
        SourceFile::from_root(self.syntax())
    }

    /// Whether the tree holds any `ERROR` or `MISSING` node.
    pub fn had_errors(&self) -> bool {
        tree::has_error(&self.syntax())
    }

    /// `ERROR` and `MISSING` nodes in document order, with positions.
    pub fn errors(&self) -> Vec<ErrorNode> {
        let root = self.syntax();
        let index = LineIndex::new(&root.text().to_string());
        tree::error_nodes(&root, &index)
    }

    pub fn sexp(&self) -> String {
        tree::sexp(&self.syntax())
    }

    pub fn dump(&self, spans: bool) -> String {
        tree::dump(&self.syntax(), spans)
    }
}

/// Main entry point. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> PassResult<Parse> {
    let tokens = lex(source);
    tracing::trace!(tokens = tokens.len(), "lexed");
    let parser =
        Parser::new(source, tokens).with_recursion_fuel(Some(DEFAULT_RECURSION_FUEL));
    parse_with_parser(parser)
}

/// Parse with a pre-configured parser (for custom fuel limits).
pub fn parse_with_parser(mut parser: Parser) -> PassResult<Parse> {
    let _span = tracing::debug_span!("parse").entered();
    parser.parse_source_file();
    let (green, diagnostics, exec_fuel) = parser.finish()?;
    tracing::debug!(diagnostics = diagnostics.len(), exec_fuel, "parsed");
    Ok((Parse { green }, diagnostics))
}
