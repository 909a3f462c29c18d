pub mod check;
pub mod grammar;
pub mod tree;
