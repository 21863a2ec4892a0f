//! Contains the common [`ErrorKind`] trait used by all parse errors to render
//! user-facing messages, and the [`Error`] struct tying a kind to the source
//! offset it occurred at.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while parsing an expression.
pub trait ErrorKind: Debug + Send {
    /// The user-facing message for this error, with the failing character
    /// offset substituted in.
    fn message(&self, index: usize) -> String;

    /// The text of the label attached to the highlighted span.
    fn label(&self) -> String {
        "here".to_string()
    }

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.message(span.start))
            .with_label(
                Label::new((src_id, span))
                    .with_message(self.label())
                    .with_color(EXPR),
            )
            .finish()
    }
}

/// An error associated with the region of source code it originated from.
#[derive(Debug)]
pub struct Error {
    /// The region of the source code that this error points at. For an
    /// unexpected-end-of-input error this is the empty range at the end of the
    /// source.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given span and kind.
    pub fn new(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            span,
            kind: Box::new(kind),
        }
    }

    /// The character offset of the failure: the offending character, or the
    /// position where a missing character was expected.
    pub fn index(&self) -> usize {
        self.span.start
    }

    /// The full user-facing message, with the failure offset substituted in.
    pub fn message(&self) -> String {
        self.kind.message(self.index())
    }

    /// Builds a report from this error's kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, self.span.clone())
    }
}
