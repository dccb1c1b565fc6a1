//! calx shunting-yard parser
//!
//! Turns the lexer's classified lexemes into a postfix queue ready for
//! stack-machine evaluation, honouring operator precedence, associativity,
//! parentheses and comma-separated function arguments.

pub mod parser;

pub use parser::{
    parse, render_snippet, ParseError, ParsedExpression, Parser, ParserConfig,
};


// Integration tests are in the tests/ directory
