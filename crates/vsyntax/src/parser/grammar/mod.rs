//! Grammar productions for V.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Expressions use a Pratt loop; statements and declarations are plain recursive
//! descent with explicit recovery sets. Ambiguous spots (generic calls, fixed array
//! types, method declarations vs. fn literals, composite literals in headers) are
//! settled by bounded lookahead over the token vector.

mod expressions;
mod items;
mod literals;
mod statements;
mod types;
mod utils;

pub(crate) use expressions::infix_binding_power;
