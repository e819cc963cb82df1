//! Error types for URL construction.

use std::fmt;

/// Errors that can occur when constructing a [`CompositeUrl`](crate::CompositeUrl).
///
/// Only construction is fallible. Setters on an existing URL never fail; they
/// ignore values they cannot accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific construction error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No URL source was supplied
    MissingArgument,
    /// The source cannot become an absolute URL
    InvalidUrl {
        /// Why the source was rejected
        reason: &'static str,
    },
    /// The grammar could not split an otherwise accepted absolute URL
    MalformedUrl {
        /// The component that could not be produced
        component: &'static str,
    },
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingArgument => {
                write!(f, "failed to construct URL: 1 argument required, but only 0 present")
            }
            ParseErrorKind::InvalidUrl { reason } => {
                write!(f, "failed to construct URL '{}': invalid URL; {reason}", self.input)
            }
            ParseErrorKind::MalformedUrl { component } => {
                write!(
                    f,
                    "failed to construct URL '{}': could not determine the {component}",
                    self.input
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
