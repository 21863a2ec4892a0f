use crate::{
    parser::{
        error::{kind, Error},
        Parser,
    },
    tokenizer::{Token, TokenKind},
};
use std::{fmt, ops::Range};

/// A number literal: an integer part, an optional fraction, and an optional
/// exponent, possibly preceded by a `-` sign absorbed from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The exact source text of the literal, sign included, with any
    /// whitespace between the sign and the digits dropped.
    pub text: String,

    /// The numeric value, computed once when the literal is parsed.
    pub value: f64,

    /// True if the literal has neither a fraction nor an exponent.
    pub integral: bool,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitNum {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Assembles a literal starting from an already-consumed integer token,
    /// pulling in a fraction and an exponent if they directly follow it with
    /// no intervening characters. `neg_start` is the offset of the absorbed
    /// `-` sign, if there was one.
    pub(crate) fn parse_digits<'source>(
        input: &mut Parser<'source>,
        neg_start: Option<usize>,
        int_token: Token<'source>,
    ) -> Result<Self, Error> {
        let mut text = String::new();
        if neg_start.is_some() {
            text.push('-');
        }
        text.push_str(int_token.lexeme);
        let mut end = int_token.span.end;
        let mut integral = true;

        if matches!(input.current_token(), Some(t) if t.kind == TokenKind::Dot && t.span.start == end) {
            let dot = input.next_token()?;
            match input.current_token() {
                Some(t) if t.kind == TokenKind::Int && t.span.start == dot.span.end => {
                    let digits = input.next_token()?;
                    text.push('.');
                    text.push_str(digits.lexeme);
                    end = digits.span.end;
                    integral = false;
                },
                _ => return Err(Error::new(
                    dot.span.end..dot.span.end,
                    kind::MissingDigits { marker: '.' },
                )),
            }
        }

        if matches!(input.current_token(), Some(t) if t.kind == TokenKind::Name && t.lexeme == "e" && t.span.start == end) {
            let marker = input.next_token()?;
            match input.current_token() {
                Some(t) if t.kind == TokenKind::Int && t.span.start == marker.span.end => {
                    let digits = input.next_token()?;
                    text.push('e');
                    text.push_str(digits.lexeme);
                    end = digits.span.end;
                    integral = false;
                },
                _ => return Err(Error::new(
                    marker.span.end..marker.span.end,
                    kind::MissingDigits { marker: 'e' },
                )),
            }
        }

        let start = neg_start.unwrap_or(int_token.span.start);

        // the assembled text is a well-formed float by construction
        let value = text.parse().unwrap();

        Ok(Self {
            text,
            value,
            integral,
            span: start..end,
        })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}
