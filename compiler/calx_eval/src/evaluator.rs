//! Evaluates postfix queues with a value stack.

use log::{debug, trace};

use calx_lexer::{Operation, Token};
use calx_parser::ParsedExpression;

use crate::bindings::Bindings;
use crate::error::EvalError;

/// Runs postfix expressions against one set of bindings.
///
/// The value stack is reset at the start of every evaluation, so an
/// evaluator can be reused across expressions.
pub struct Evaluator<'a> {
    bindings: &'a Bindings,
    stack: Vec<f64>,
}

impl<'a> Evaluator<'a> {
    pub fn new(bindings: &'a Bindings) -> Self {
        Evaluator {
            bindings,
            stack: Vec::new(),
        }
    }

    /// Consumes the queue front to back and returns the single value left.
    ///
    /// Operands are popped so that the first one pushed becomes the first
    /// argument: `a b -` is `a - b`.
    pub fn evaluate(&mut self, parsed: &ParsedExpression) -> Result<f64, EvalError> {
        self.stack.clear();

        for token in parsed.tokens() {
            match token {
                Token::Number { value, .. } => self.stack.push(*value),
                Token::Variable { name } => {
                    let value = self
                        .bindings
                        .get(name)
                        .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })?;
                    trace!("{} = {}", name, value);
                    self.stack.push(value);
                }
                Token::Operation(operation) => self.apply(operation)?,
            }
        }

        match self.stack.as_slice() {
            [result] => {
                debug!("Evaluated {} to {}", parsed, result);
                Ok(*result)
            }
            rest => Err(EvalError::MalformedExpression {
                remaining_stack_size: rest.len(),
            }),
        }
    }

    fn apply(&mut self, operation: &Operation) -> Result<(), EvalError> {
        let count = operation.arity.count();
        if self.stack.len() < count {
            debug!(
                "{} needs {} operands, stack holds {}",
                operation,
                count,
                self.stack.len()
            );
            return Err(EvalError::MalformedExpression {
                remaining_stack_size: self.stack.len(),
            });
        }

        // split_off keeps push order, so operands[0] is the left operand.
        let operands = self.stack.split_off(self.stack.len() - count);
        let result = operation.id.apply(&operands)?;
        trace!("{}{:?} = {}", operation.id, operands, result);
        self.stack.push(result);
        Ok(())
    }
}

/// Evaluates `parsed` against `bindings` with a fresh evaluator.
pub fn evaluate(parsed: &ParsedExpression, bindings: &Bindings) -> Result<f64, EvalError> {
    Evaluator::new(bindings).evaluate(parsed)
}
