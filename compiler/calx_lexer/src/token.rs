use std::fmt;

use calx_math::{Arity, OperationId};

/// Represents a lexeme's location in the expression text.
///
/// Line and column are 1-based and counted in characters; the offset is the
/// 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// Location of the first character of a source.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (offset {})", self.line, self.column, self.offset)
    }
}

/// An operator or function application with its role already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Source text of the operator or function name
    pub symbol: String,
    /// Operands consumed at evaluation time
    pub arity: Arity,
    /// Prefix (unary operator or function) rather than infix
    pub is_prefix: bool,
    /// Kernel operation to dispatch to
    pub id: OperationId,
}

impl Operation {
    /// True for single-character operators such as `+` or `^`, as opposed to
    /// named functions.
    pub fn is_symbolic(&self) -> bool {
        let mut chars = self.symbol.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_alphanumeric())
    }

    /// The single operator character, if this is a symbolic operation.
    pub fn symbol_char(&self) -> Option<char> {
        if self.is_symbolic() {
            self.symbol.chars().next()
        } else {
            None
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prefix && self.is_symbolic() {
            // Unary minus would otherwise be indistinguishable from subtraction.
            write!(f, "{}", self.id)
        } else {
            f.write_str(&self.symbol)
        }
    }
}

/// A value-carrying token, the element type of the postfix queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, or a named constant already resolved to its value
    Number {
        /// Source text (`1.5e3`, `pi`, ...)
        text: String,
        /// Parsed value
        value: f64,
    },
    /// A name resolved against caller bindings at evaluation time
    Variable {
        /// Variable name
        name: String,
    },
    /// An operator or function application
    Operation(Operation),
}

impl Token {
    /// Returns true for numbers and variables.
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number { .. } | Token::Variable { .. })
    }

    /// Source text of the token.
    pub fn text(&self) -> &str {
        match self {
            Token::Number { text, .. } => text,
            Token::Variable { name } => name,
            Token::Operation(op) => &op.symbol,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number { text, .. } | Token::Variable { name: text } => f.write_str(text),
            Token::Operation(op) => write!(f, "{}", op),
        }
    }
}

/// What a classified lexeme turned out to be.
///
/// Parentheses and commas only steer the shunting-yard pass and never reach
/// the postfix queue.
#[derive(Debug, Clone, PartialEq)]
pub enum LexemeKind {
    /// A number, variable or operation
    Token(Token),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,` separating function arguments
    Comma,
}

/// A classified lexeme together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// Classification
    pub kind: LexemeKind,
    /// The original source text of the lexeme
    pub text: String,
    /// Where the lexeme starts
    pub location: Location,
}

impl Lexeme {
    /// Creates a new lexeme.
    pub fn new<S: Into<String>>(kind: LexemeKind, text: S, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.text, self.location)
    }
}
