//! Declarative grammar metadata.
//!
//! The parser itself is hand-written, so this is not a full rule table. It is the
//! part of `grammar.json` that consumers look at: named precedence levels with
//! their operators, accepted conflicts, hidden rules, supertypes, external tokens.

mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{Assoc, GrammarInfo, PrecedenceLevel};
