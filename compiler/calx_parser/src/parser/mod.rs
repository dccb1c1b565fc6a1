//! Shunting-yard conversion from the classified lexeme stream to postfix.

use log::{debug, trace, warn};

use calx_lexer::{Lexeme, LexemeKind, Lexer, Location, Operation, Token};
use calx_math::Registry;

pub mod config;
pub mod diagnostics;
pub mod expression;
pub mod precedence;
pub mod test_utils;

pub use config::ParserConfig;
pub use diagnostics::{render_snippet, ParseError};
pub use expression::ParsedExpression;
pub use precedence::{has_precedence, Associativity, OperatorDetails};

/// An entry on the operator stack.
#[derive(Debug, Clone, PartialEq)]
enum StackEntry {
    /// An open parenthesis and where it was written
    Open(Location),
    Operation(Operation),
}

/// Converts infix expressions to postfix order.
///
/// A parser may be reused for any number of sequential parses; every call to
/// [`Parser::parse`] starts from an empty operator stack and output queue.
#[derive(Debug)]
pub struct Parser<'r> {
    registry: &'r Registry,
    config: ParserConfig,
    operator_stack: Vec<StackEntry>,
    output_queue: Vec<Token>,
}

impl Parser<'static> {
    /// Parser over the builtin registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Parser::with_registry(Registry::builtin(), config)
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Parser<'r> {
    /// Parser resolving names against a caller-provided registry.
    pub fn with_registry(registry: &'r Registry, config: ParserConfig) -> Self {
        Self {
            registry,
            config,
            operator_stack: Vec::new(),
            output_queue: Vec::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `input` into a postfix expression.
    ///
    /// The first invalid lexeme aborts the parse; nothing accumulated so far
    /// is returned.
    pub fn parse(&mut self, input: &str) -> Result<ParsedExpression, ParseError> {
        self.operator_stack.clear();
        self.output_queue.clear();

        let result = self.run(input);

        // The queue is handed out on success; on failure drop the partial state.
        let output = std::mem::take(&mut self.output_queue);
        self.operator_stack.clear();
        result?;

        let parsed = ParsedExpression::new(output);
        debug!("Parsed {:?} into {} postfix tokens: {}", input, parsed.len(), parsed);
        Ok(parsed)
    }

    fn run(&mut self, input: &str) -> Result<(), ParseError> {
        let mut count = 0usize;

        for lexeme in Lexer::with_registry(input, self.registry) {
            let lexeme = lexeme?;

            count += 1;
            if let Some(limit) = self.config.max_tokens {
                if count > limit {
                    return Err(ParseError::TooManyTokens { limit });
                }
            }

            self.push_lexeme(lexeme)?;
        }

        self.drain()
    }

    fn push_lexeme(&mut self, lexeme: Lexeme) -> Result<(), ParseError> {
        let Lexeme { kind, location, .. } = lexeme;
        match kind {
            LexemeKind::Token(Token::Operation(operation)) => {
                self.push_operation(operation);
            }
            LexemeKind::Token(operand) => {
                trace!("Operand {} to queue", operand);
                self.output_queue.push(operand);
            }
            LexemeKind::LeftParen => {
                trace!("Open parenthesis at {}", location);
                self.operator_stack.push(StackEntry::Open(location));
            }
            LexemeKind::RightParen => {
                self.pop_until_open(location)?;
                // Discard the matching parenthesis; a comma would leave it for
                // the remaining arguments.
                if let Some(StackEntry::Open(_)) = self.operator_stack.last() {
                    self.operator_stack.pop();
                }
            }
            LexemeKind::Comma => {
                self.pop_until_open(location)?;
            }
        }
        Ok(())
    }

    fn push_operation(&mut self, operation: Operation) {
        if operation.is_prefix {
            trace!("Prefix {} to stack", operation);
            self.operator_stack.push(StackEntry::Operation(operation));
            return;
        }

        while let Some(StackEntry::Operation(top)) = self.operator_stack.last() {
            if has_precedence(top, &operation) {
                break;
            }
            self.pop_to_queue();
        }

        trace!("Infix {} to stack", operation);
        self.operator_stack.push(StackEntry::Operation(operation));
    }

    /// Moves operations to the queue until an open parenthesis is on top.
    /// Running out of stack means the `)` or `,` at `location` is unmatched.
    fn pop_until_open(&mut self, location: Location) -> Result<(), ParseError> {
        loop {
            match self.operator_stack.last() {
                Some(StackEntry::Open(_)) => return Ok(()),
                Some(StackEntry::Operation(_)) => self.pop_to_queue(),
                None => return self.unbalanced(location),
            }
        }
    }

    fn pop_to_queue(&mut self) {
        if let Some(StackEntry::Operation(operation)) = self.operator_stack.pop() {
            trace!("Operation {} to queue", operation);
            self.output_queue.push(Token::Operation(operation));
        }
    }

    /// Moves everything left on the stack to the queue, top first.
    fn drain(&mut self) -> Result<(), ParseError> {
        while let Some(entry) = self.operator_stack.pop() {
            match entry {
                StackEntry::Operation(operation) => {
                    self.output_queue.push(Token::Operation(operation));
                }
                StackEntry::Open(location) => self.unbalanced(location)?,
            }
        }
        Ok(())
    }

    fn unbalanced(&self, location: Location) -> Result<(), ParseError> {
        if self.config.strict_parentheses {
            return Err(ParseError::UnbalancedParenthesis { position: location });
        }
        warn!("Ignoring unbalanced parenthesis at {}", location);
        Ok(())
    }
}

/// Parses `input` with a fresh default parser.
pub fn parse(input: &str) -> Result<ParsedExpression, ParseError> {
    Parser::new().parse(input)
}

#[cfg(test)]
mod tests;
