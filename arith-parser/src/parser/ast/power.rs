use crate::parser::{
    ast::expr::Expr,
    error::Error,
    op::{BinOp, BinOpKind},
    Parser,
};
use std::{fmt, ops::Range};

/// A single exponentiation, such as `2 ^ 3`. Exponentiation does not chain;
/// `2 ^ 3 ^ 4` is rejected and the grouping must be written explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Power {
    /// The base of the exponentiation.
    pub base: Box<Expr>,

    /// The exponent.
    pub exponent: Box<Expr>,

    /// The region of the source code that this [`Power`] was parsed from.
    pub span: Range<usize>,
}

impl Power {
    /// Returns the span of the exponentiation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a value followed by at most one `^ value` pair.
    pub(crate) fn parse_or_lower<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        let base = Expr::parse_value(input)?;

        let mut ahead = input.clone();
        if let Ok(op) = ahead.try_parse::<BinOp>() {
            if op.kind == BinOpKind::Exp {
                input.set_cursor(&ahead);
                let exponent = Expr::parse_value(input)?;
                let span = base.span().start..exponent.span().end;
                return Ok(Expr::Power(Power {
                    base: Box::new(base),
                    exponent: Box::new(exponent),
                    span,
                }));
            }
        }

        Ok(base)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ^ {}", self.base, self.exponent)
    }
}
