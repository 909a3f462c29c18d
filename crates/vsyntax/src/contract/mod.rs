//! Declarative contract of the V syntax tree.
//!
//! The parser is hand-written, so nothing here drives parsing. This module describes
//! the trees the parser builds in the vocabulary of tree-sitter's `node-types.json`
//! and `grammar.json`, which lets query tools and editors consume them without
//! linking the parser.

mod info;
mod node_types;

#[cfg(test)]
mod info_tests;

pub use info::grammar_info;
pub use node_types::{SUPERTYPES, node_type_table, node_types};
