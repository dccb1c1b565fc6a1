//! Classification of word lexemes

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::alpha1;
use nom::combinator::{all_consuming, recognize};
use nom::error::Error as NomError;
use nom::number::complete::recognize_float;
use nom::sequence::pair;

use calx_math::{Registry, NEGATE};

use crate::token::{Operation, Token};

/// Strict numeric literal check: decimal or exponent form with no trailing
/// garbage. Unlike `str::parse::<f64>` this refuses `inf` and `nan`.
pub fn is_number(text: &str) -> bool {
    !text.starts_with(['+', '-'])
        && all_consuming(recognize_float::<&str, NomError<&str>>)(text).is_ok()
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(text: &str) -> bool {
    all_consuming(recognize(pair(
        alt((alpha1::<&str, NomError<&str>>, tag("_"))),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    )))(text)
    .is_ok()
}

/// Classifies a word lexeme, in priority order: number, function, constant,
/// variable. Returns `None` when the word fits none of them.
///
/// The registry's unary minus entry is reachable only through `-`; the word
/// `negate` is an ordinary name.
pub fn classify_word(text: &str, registry: &Registry) -> Option<Token> {
    if is_number(text) {
        let value = text.parse::<f64>().ok()?;
        return Some(Token::Number {
            text: text.to_string(),
            value,
        });
    }

    if let Some(entry) = registry.lookup(text).filter(|_| text != NEGATE) {
        return Some(Token::Operation(Operation {
            symbol: text.to_string(),
            arity: entry.arity,
            is_prefix: true,
            id: entry.id,
        }));
    }

    if let Some(value) = registry.constant(text) {
        return Some(Token::Number {
            text: text.to_string(),
            value,
        });
    }

    if is_identifier(text) {
        return Some(Token::Variable {
            name: text.to_string(),
        });
    }

    None
}
