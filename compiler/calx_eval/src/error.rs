use calx_math::MathError;
use thiserror::Error;

/// Errors raised while evaluating a postfix expression.
///
/// Numeric domain problems never show up here; the math kernel maps those to
/// defined values. Only structural problems abort an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    /// The value stack underflowed, or did not end with exactly one value
    #[error("malformed expression: {remaining_stack_size} values left on the stack")]
    MalformedExpression { remaining_stack_size: usize },

    #[error(transparent)]
    UnsupportedArity(#[from] MathError),
}
