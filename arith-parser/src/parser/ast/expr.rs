use crate::{
    parser::{
        ast::{chain::Chain, literal::LitNum, paren::Paren, power::Power},
        error::{kind, Error},
        GrammarMode,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// Represents a general expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, such as `2`, `3.14`, or `-2.5e2`.
    Literal(LitNum),

    /// A parenthesized expression, possibly negated, such as `(1 + 2)` or `-(100)`.
    Paren(Paren),

    /// A single exponentiation, such as `2 ^ 3`.
    Power(Power),

    /// A flattened run of same-precedence operator applications, such as `1 - 2 + 3`.
    Chain(Chain),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Power(power) => power.span(),
            Expr::Chain(chain) => chain.span(),
        }
    }

    /// Parses a value: an optionally negated number literal or parenthesized expression.
    ///
    /// A `-` sign is absorbed into the literal it precedes, or recorded on the
    /// parenthesis it precedes; double negation is not part of the grammar.
    pub(crate) fn parse_value<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Sub => {
                let start = token.span.start;
                let next = input.next_token()?;
                match next.kind {
                    TokenKind::OpenParen => {
                        Paren::parse_body(input, false, start).map(Expr::Paren)
                    },
                    TokenKind::Int => {
                        LitNum::parse_digits(input, Some(start), next).map(Expr::Literal)
                    },
                    _ => Err(Error::new(next.span, kind::ExpectedValue)),
                }
            },
            TokenKind::OpenParen => {
                Paren::parse_body(input, true, token.span.start).map(Expr::Paren)
            },
            TokenKind::Int => LitNum::parse_digits(input, None, token).map(Expr::Literal),
            _ => Err(Error::new(token.span, kind::ExpectedValue)),
        }
    }
}

impl<'source> Parse<'source> for Expr {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        match input.mode() {
            GrammarMode::Lenient => Chain::parse_term(input),
            GrammarMode::Associative => Chain::parse_sum(input),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Power(power) => power.fmt(f),
            Expr::Chain(chain) => chain.fmt(f),
        }
    }
}
