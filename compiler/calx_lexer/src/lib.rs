//! calx lexical analyzer
//!
//! Splits an arithmetic expression into lexemes and classifies each one as a
//! number, variable, operation or piece of punctuation. Whether an operator
//! is prefix or infix is decided here, from the raw characters preceding it,
//! so the parser only ever sees fully resolved operations.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    };
}

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Lexeme, LexemeKind, Location, Operation, Token};
