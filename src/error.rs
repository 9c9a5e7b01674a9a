//! Error types for template syntax checking

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template content
pub type Span = std::ops::Range<usize>;

/// A single defect found by the template syntax validator.
///
/// Syntax problems are ordinary values, not `Err` returns: the validator
/// collects every defect it finds so callers can show them all at once.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// Opening and closing delimiter counts differ
    #[error("mismatched delimiters: {open} opening '{{{{' vs {close} closing '}}}}'")]
    UnbalancedDelimiters {
        open: usize,
        close: usize,
        span: Span,
    },

    /// Content between a `{{`/`}}` pair is not a legal variable name
    #[error("invalid variable name '{token}' (names may contain letters, digits and underscore)")]
    InvalidIdentifier { token: String, span: Span },

    /// Nothing left after removing the placeholders
    #[error("template has no literal content outside placeholders")]
    EmptyContent { span: Span },
}

impl SyntaxError {
    /// The source range this error points at
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnbalancedDelimiters { span, .. } => span.clone(),
            SyntaxError::InvalidIdentifier { span, .. } => span.clone(),
            SyntaxError::EmptyContent { span } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span();
        let message = self.to_string();

        Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .unwrap();

        String::from_utf8(buf).unwrap()
    }
}
