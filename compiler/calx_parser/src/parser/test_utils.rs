//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use calx_lexer::{Operation, Token};
use calx_math::OperationId;

use super::{ParsedExpression, Parser};

/// Creates a number token whose text is the plain rendering of `value`
pub fn number(value: f64) -> Token {
    Token::Number {
        text: value.to_string(),
        value,
    }
}

/// Creates a variable token
pub fn variable(name: &str) -> Token {
    Token::Variable {
        name: name.to_string(),
    }
}

/// Creates an infix operation for a single-character operator
pub fn infix(symbol: char, id: OperationId) -> Operation {
    Operation {
        symbol: symbol.to_string(),
        arity: id.arity(),
        is_prefix: false,
        id,
    }
}

/// Creates a named function operation
pub fn function(name: &str, id: OperationId) -> Operation {
    Operation {
        symbol: name.to_string(),
        arity: id.arity(),
        is_prefix: true,
        id,
    }
}

/// Creates the unary minus operation as the lexer emits it
pub fn negate() -> Operation {
    Operation {
        symbol: "-".to_string(),
        arity: OperationId::Negate.arity(),
        is_prefix: true,
        id: OperationId::Negate,
    }
}

/// Parses with a default parser, panicking on error
pub fn parse_ok(input: &str) -> ParsedExpression {
    Parser::new()
        .parse(input)
        .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// Renders the postfix queue of `input` as a space separated string
pub fn postfix(input: &str) -> String {
    parse_ok(input).to_string()
}
