//! Computation over parsed arithmetic expressions: two agreeing evaluators,
//! number formatting strategies, a single-step simplifier that rewrites the
//! source text, and a generator of commuted forms.

pub mod commute;
pub mod eval;
pub mod fmt;
pub mod simplify;
pub mod stack;
