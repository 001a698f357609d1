//! Parse error types for TS catalogs.

use thiserror::Error;

/// An error that occurred while parsing a TS document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// Line and column of the error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            Self::Syntax { line, column, .. } | Self::UnexpectedEof { line, column } => {
                (*line, *column)
            }
        }
    }
}
