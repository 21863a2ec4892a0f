//! Parser for plain arithmetic expressions.
//!
//! The parser produces an immutable abstract syntax tree where every node
//! carries the [`Range<usize>`](std::ops::Range) of source text it was parsed
//! from, enabling precise diagnostics and text splicing.
//!
//! Two grammars are supported over the same token stream:
//!
//! - The **lenient** grammar ([`parser::parse`]) flattens runs of `+`/`-` and
//!   runs of `*`/`/` into mixed [`Chain`](parser::ast::chain::Chain) nodes,
//!   remembering the operator attached to each link.
//! - The **associative** grammar ([`parser::parse_associative`]) gives every
//!   operator its own precedence layer, so each chain holds exactly one
//!   operator and can be classified as commutative or not.

pub mod parser;
pub mod tokenizer;
