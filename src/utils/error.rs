//! Error handling for riccilang

use crate::frontend::token::TokenKind;
use crate::utils::Span;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Front end error
///
/// None of these abort parsing: the parser records them and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken {
        expected: TokenKind,
        got: TokenKind,
        span: Span,
    },

    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String, span: Span },
}

impl Error {
    /// Get the span associated with this error
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::InvalidInteger { span, .. } => *span,
        }
    }
}
