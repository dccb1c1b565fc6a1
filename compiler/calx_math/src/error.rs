use thiserror::Error;

/// Errors raised by the operation registry and arity dispatch.
///
/// None of these come from numeric input: the kernel itself is total. They
/// signal an inconsistent registry entry or an operation applied to the wrong
/// number of operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An operation was registered or applied with an operand count it does not take.
    #[error("operation '{name}' does not support {arity} operand(s)")]
    UnsupportedArity {
        /// Registry name or operation name involved.
        name: String,
        /// The offending operand count.
        arity: usize,
    },
}
