//! Errors that can occur while parsing arithmetic expressions.

pub mod kind;

pub use arith_error::Error;
