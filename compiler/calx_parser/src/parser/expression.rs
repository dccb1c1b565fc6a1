use std::fmt;

use calx_lexer::Token;

/// The result of a parse: an expression in postfix (reverse Polish) order.
///
/// Each value is independent of the parser that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedExpression {
    tokens: Vec<Token>,
}

impl ParsedExpression {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The postfix queue, front first.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Distinct variable names, in the order they first appear.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in &self.tokens {
            if let Token::Variable { name } = token {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

impl<'a> IntoIterator for &'a ParsedExpression {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
