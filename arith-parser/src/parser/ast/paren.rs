use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A parenthesized expression, optionally negated from the outside. A [`Paren`]
/// can only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// False if the parenthesis is preceded by a `-` sign that negates its value.
    pub sign: bool,

    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from,
    /// including the `-` sign if present.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the body of a parenthesized expression, the opening parenthesis
    /// (and `-` sign, if any) having already been consumed. `start` is the
    /// offset of the sign or opening parenthesis.
    pub(crate) fn parse_body<'source>(
        input: &mut Parser<'source>,
        sign: bool,
        start: usize,
    ) -> Result<Self, Error> {
        // reject `()` with a dedicated error pointing at the closing parenthesis
        let mut ahead = input.clone();
        if let Ok(token) = ahead.next_token() {
            if token.kind == TokenKind::CloseParen {
                return Err(Error::new(token.span, kind::EmptyParenthesis));
            }
        }

        let expr = input.try_parse::<Expr>()?;

        let close = match input.next_token() {
            Ok(token) => token,
            Err(_) => return Err(Error::new(input.eof_span(), kind::UnclosedParenthesis)),
        };
        if close.kind != TokenKind::CloseParen {
            return Err(Error::new(close.span, kind::UnclosedParenthesis));
        }

        Ok(Self {
            sign,
            expr: Box::new(expr),
            span: start..close.span.end,
        })
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.sign {
            write!(f, "-")?;
        }
        write!(f, "(")?;
        self.expr.fmt(f)?;
        write!(f, ")")
    }
}
