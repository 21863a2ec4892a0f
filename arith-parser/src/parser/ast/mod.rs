//! The nodes of the abstract syntax tree. Nodes are immutable once parsed and
//! every node records the span of source text it covers.

pub mod chain;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod power;
