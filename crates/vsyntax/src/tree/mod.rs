//! Queries over a finished tree: error nodes, positions and printed forms.

mod errors;
mod line_index;
mod printer;

#[cfg(test)]
mod line_index_tests;

pub use errors::{ErrorNode, error_nodes, has_error};
pub use line_index::{LineIndex, Point};
pub use printer::{dump, sexp};
