use thiserror::Error;

use crate::token::Location;

/// Errors produced while classifying lexemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The lexeme is not a number, function, constant, identifier or operator
    /// usable at that position.
    #[error("invalid token '{text}' at {position}")]
    InvalidToken {
        /// The offending source text
        text: String,
        /// Where it starts
        position: Location,
    },
}

impl LexError {
    /// Byte offset of the offending lexeme.
    pub fn offset(&self) -> usize {
        match self {
            LexError::InvalidToken { position, .. } => position.offset,
        }
    }
}
