//! Fully parenthesized rendering of expressions, making every implicit
//! grouping explicit. Useful for inspecting how a source string was parsed.

use crate::parser::ast::{
    chain::Chain,
    expr::Expr,
    literal::LitNum,
    paren::Paren,
    power::Power,
};
use std::fmt;

/// Types that can render themselves with every grouping made explicit.
pub trait FullParenthesis {
    /// Formats the value with explicit parentheses around every operation.
    fn fmt_full(&self, f: &mut fmt::Formatter) -> fmt::Result;

    /// Wraps the value in a helper struct whose [`Display`](fmt::Display)
    /// implementation is [`fmt_full`](FullParenthesis::fmt_full).
    fn as_full_paren(&self) -> FullParenFormatter<'_, Self> {
        FullParenFormatter(self)
    }
}

/// See [`FullParenthesis::as_full_paren`].
pub struct FullParenFormatter<'a, T: ?Sized>(&'a T);

impl<T: FullParenthesis + ?Sized> fmt::Display for FullParenFormatter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt_full(f)
    }
}

impl FullParenthesis for Expr {
    fn fmt_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt_full(f),
            Expr::Paren(paren) => paren.fmt_full(f),
            Expr::Power(power) => power.fmt_full(f),
            Expr::Chain(chain) => chain.fmt_full(f),
        }
    }
}

impl FullParenthesis for LitNum {
    fn fmt_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FullParenthesis for Paren {
    fn fmt_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.sign {
            write!(f, "-")?;
        }
        write!(f, "(")?;
        self.expr.fmt_full(f)?;
        write!(f, ")")
    }
}

impl FullParenthesis for Power {
    fn fmt_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        self.base.fmt_full(f)?;
        write!(f, " ^ ")?;
        self.exponent.fmt_full(f)?;
        write!(f, ")")
    }
}

impl FullParenthesis for Chain {
    fn fmt_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // left fold: open all groups up front, close one after each operand
        for _ in 0..self.rest.size() {
            write!(f, "(")?;
        }
        self.first.fmt_full(f)?;
        for link in self.rest.iter() {
            write!(f, " {} ", link.op)?;
            link.operand.fmt_full(f)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parses the source and renders it fully parenthesized.
    fn full(source: &str) -> String {
        parse(source).unwrap().as_full_paren().to_string()
    }

    #[test]
    fn precedence_is_explicit() {
        assert_eq!(full("1 + 2 * 3"), "(1 + (2 * 3))");
    }

    #[test]
    fn chains_group_left() {
        assert_eq!(full("1 - 2 + 3"), "((1 - 2) + 3)");
        assert_eq!(full("10 / 5 / 2"), "((10 / 5) / 2)");
    }

    #[test]
    fn power_is_wrapped() {
        assert_eq!(full("2 ^ 3 * 4"), "((2 ^ 3) * 4)");
    }

    #[test]
    fn negation_keeps_its_sign() {
        assert_eq!(full("-(1 + 2)"), "-((1 + 2))");
    }

    #[test]
    fn literal_is_bare() {
        assert_eq!(full("42"), "42");
        assert_eq!(full("-3.5"), "-3.5");
    }
}
