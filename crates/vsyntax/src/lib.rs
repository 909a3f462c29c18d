//! vsyntax: resilient lexer and parser for the V programming language.
//!
//! Produces a lossless concrete syntax tree for any input, valid or not, together with
//! a list of diagnostics. The node vocabulary follows the tree-sitter V grammar, and the
//! same vocabulary is exported as a declarative contract in [`contract`].
//!
//! # Example
//!
//! ```
//! let source = "fn main() {\n\tx := 1 + 2\n}\n";
//! let (parse, diagnostics) = vsyntax::parse(source).expect("out of fuel");
//! assert!(diagnostics.is_empty());
//! assert!(!parse.had_errors());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod contract;
pub mod diagnostics;
pub mod parser;
pub mod tree;

/// Result type for passes that produce both output and diagnostics.
///
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{Parse, Parser, SyntaxKind, SyntaxNode, parse};
pub use tree::{ErrorNode, LineIndex, Point};

/// Errors that stop parsing altogether.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;
