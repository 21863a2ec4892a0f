pub mod ast;
pub mod error;
pub mod fmt;
pub mod op;

use ast::expr::Expr;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// Selects which grammar the parser applies on top of the shared token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarMode {
    /// `+` and `-` share one precedence layer and `*` and `/` another, so a
    /// run like `1 - 2 + 3` becomes a single mixed chain with the operator
    /// remembered per link.
    Lenient,

    /// Every operator has its own precedence layer (`/` binds tightest, then
    /// `*`, `-`, `+`), so each chain holds exactly one operator.
    Associative,
}

/// A high-level parser for arithmetic expressions. This is the type to use to parse an arbitrary
/// piece of source text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The grammar applied to the token stream.
    mode: GrammarMode,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source, using the lenient grammar.
    pub fn new(source: &'source str) -> Self {
        Self::with_mode(source, GrammarMode::Lenient)
    }

    /// Create a new parser for the given source, using the associative grammar.
    pub fn new_associative(source: &'source str) -> Self {
        Self::with_mode(source, GrammarMode::Associative)
    }

    /// Create a new parser for the given source and grammar.
    pub fn with_mode(source: &'source str, mode: GrammarMode) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            mode,
        }
    }

    /// The grammar this parser applies.
    pub fn mode(&self) -> GrammarMode {
        self.mode
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an end-of-expression error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(Error::new(self.eof_span(), kind::UnexpectedEoExpr))
    }

    /// Moves the cursor of this parser to the position of another parser, typically a clone of
    /// this one that was advanced speculatively.
    pub fn set_cursor(&mut self, other: &Parser<'source>) {
        self.cursor = other.cursor;
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error pointing at the first leftover token is returned.
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.next_token() {
            Err(_) => Ok(value),
            Ok(token) => Err(Error::new(token.span, kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error>;
}

/// Parses the source with the lenient grammar, requiring all input to be consumed.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source).try_parse_full()
}

/// Parses the source with the associative grammar, requiring all input to be consumed.
pub fn parse_associative(source: &str) -> Result<Expr, Error> {
    Parser::new_associative(source).try_parse_full()
}
