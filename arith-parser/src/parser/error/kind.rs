//! The specific kinds of parse errors, each carrying its own user-facing message and label.

pub use arith_error::ErrorKind;

/// The end of the source was reached where a sign, digit, or parenthesis was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnexpectedEoExpr;

impl ErrorKind for UnexpectedEoExpr {
    fn message(&self, index: usize) -> String {
        format!("unexpected end of expression at index {index}")
    }

    fn label(&self) -> String {
        "expected a sign, number, or parenthesis here".to_string()
    }
}

/// A token that cannot begin a value was found where a value was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedValue;

impl ErrorKind for ExpectedValue {
    fn message(&self, index: usize) -> String {
        format!("expected a digit or parenthesis at index {index}")
    }

    fn label(&self) -> String {
        "this character cannot start a value".to_string()
    }
}

/// A decimal point or exponent marker was not followed by at least one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDigits {
    /// The character that demanded digits: `.` or `e`.
    pub marker: char,
}

impl ErrorKind for MissingDigits {
    fn message(&self, index: usize) -> String {
        format!("expected a digit after `{}` at index {}", self.marker, index)
    }

    fn label(&self) -> String {
        format!("`{}` must be followed by at least one digit", self.marker)
    }
}

/// An opening parenthesis was never matched by a closing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnclosedParenthesis;

impl ErrorKind for UnclosedParenthesis {
    fn message(&self, index: usize) -> String {
        format!("missing closing parenthesis at index {index}")
    }

    fn label(&self) -> String {
        "expected `)` here".to_string()
    }
}

/// A closing parenthesis immediately followed an opening one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyParenthesis;

impl ErrorKind for EmptyParenthesis {
    fn message(&self, index: usize) -> String {
        format!("empty parentheses at index {index}")
    }

    fn label(&self) -> String {
        "parentheses must contain an expression".to_string()
    }
}

/// A complete expression was parsed, but tokens remain in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn message(&self, index: usize) -> String {
        format!("unexpected trailing characters at index {index}")
    }

    fn label(&self) -> String {
        "could not include this in the expression".to_string()
    }
}

/// An intentionally unremarkable error raised by speculative parses that are expected to fail,
/// such as probing for an operator. Callers always discard it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonFatal;

impl ErrorKind for NonFatal {
    fn message(&self, index: usize) -> String {
        format!("internal speculative parse failed at index {index}")
    }
}
