//! Parse infix arithmetic once, evaluate it many times.
//!
//! ```
//! use calx::{parse, evaluate, Bindings};
//!
//! let expr = parse("12 + x - (3 * y^5)").unwrap();
//! let bindings = Bindings::new().with("x", 7.0).with("y", 2.0);
//! assert_eq!(evaluate(&expr, &bindings).unwrap(), -77.0);
//! ```

use log::debug;
use thiserror::Error;

pub use calx_eval::{Bindings, EvalError, Evaluator};
pub use calx_lexer::{LexError, Lexeme, LexemeKind, Lexer, Location, Token};
pub use calx_math::{Arity, MathError, OperationId, Registry};
pub use calx_parser::{ParseError, ParsedExpression, Parser, ParserConfig};

/// Any failure of the one-shot [`parse_and_evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Parses `expression` into postfix form with the default parser.
pub fn parse(expression: &str) -> Result<ParsedExpression, ParseError> {
    calx_parser::parse(expression)
}

/// Evaluates a parsed expression against `bindings`.
pub fn evaluate(parsed: &ParsedExpression, bindings: &Bindings) -> Result<f64, EvalError> {
    calx_eval::evaluate(parsed, bindings)
}

/// Parses and evaluates in one step.
pub fn parse_and_evaluate(expression: &str, bindings: &Bindings) -> Result<f64, Error> {
    let parsed = parse(expression)?;
    debug!(
        "{:?} references {} variable(s): {:?}",
        expression,
        parsed.variables().len(),
        parsed.variables()
    );
    Ok(evaluate(&parsed, bindings)?)
}

/// Human-readable report for `error`, pointing into `source` when the error
/// has a position.
pub fn describe_error(source: &str, error: &Error) -> String {
    match error {
        Error::Parse(err) => calx_parser::render_snippet(source, err),
        Error::Eval(err) => format!("error: {err}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_and_evaluate() {
        let bindings = Bindings::new().with("x", 7.0).with("y", 2.0);
        assert_eq!(parse_and_evaluate("12+x-(3*y^5)", &bindings), Ok(-77.0));
    }

    #[test]
    fn test_error_wrapping() {
        let err = parse_and_evaluate("z * 2", &Bindings::new()).unwrap_err();
        assert_eq!(
            err,
            Error::Eval(EvalError::UndefinedVariable {
                name: "z".to_string(),
            })
        );
        assert_eq!(err.to_string(), "evaluation error: undefined variable 'z'");
        assert_eq!(describe_error("z * 2", &err), "error: undefined variable 'z'\n");
    }

    #[test]
    fn test_describe_parse_error() {
        let source = "1 + 2x";
        let err = parse_and_evaluate(source, &Bindings::new()).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::InvalidToken(_))));
        let report = describe_error(source, &err);
        assert!(report.starts_with("error: invalid token '2x' at 1:5 (offset 4)\n"));
        assert!(report.contains("  |     ^^\n"));
    }
}
