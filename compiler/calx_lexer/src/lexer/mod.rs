//! Lexer implementation for calx expressions
//! Converts source text into a stream of classified lexemes for the parser

use logos::Logos;
use std::ops::Range;

use calx_math::Registry;

use crate::error::LexError;
use crate::logos_token::{is_operator_char, LogosToken};
use crate::token::{Lexeme, LexemeKind, Location, Operation, Token};

pub mod classify;

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The source expression being lexed
    source: &'a str,
    /// Registry used to resolve function names, constants and operators
    registry: &'a Registry,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset the line/column pair refers to
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over `source` using the builtin registry
    pub fn new(source: &'a str) -> Self {
        Self::with_registry(source, Registry::builtin())
    }

    /// Create a new lexer resolving names against `registry`
    pub fn with_registry(source: &'a str, registry: &'a Registry) -> Self {
        Self {
            source,
            registry,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// Lex and classify the whole of `source`, stopping at the first error
    pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
        Lexer::new(source).collect()
    }

    /// Update the lexer's position based on the current span
    /// This handles multi-byte characters correctly by counting characters, not bytes
    fn sync_position_to(&mut self, span: &Range<usize>) -> Location {
        let text = &self.source[self.offset..span.start];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset = span.start;
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Whether an operator starting at `start` is in prefix position: it is
    /// the first thing in the expression, or the last non-whitespace
    /// character before it is an operator other than `)`.
    fn is_prefix_position(&self, start: usize) -> bool {
        match self.source[..start].trim_end().chars().next_back() {
            None => true,
            Some(c) => is_operator_char(c) && c != ')',
        }
    }

    /// Resolve an operator character to an operation, or `None` for a unary
    /// plus, which is dropped.
    fn classify_operator(
        &self,
        op: char,
        lexeme: &str,
        location: Location,
    ) -> Result<Option<Token>, LexError> {
        let invalid = || LexError::InvalidToken {
            text: lexeme.to_string(),
            position: location,
        };

        if self.is_prefix_position(location.offset) {
            return match op {
                '+' => Ok(None),
                '-' => {
                    let entry = self.registry.negate().ok_or_else(invalid)?;
                    Ok(Some(Token::Operation(Operation {
                        symbol: lexeme.to_string(),
                        arity: entry.arity,
                        is_prefix: true,
                        id: entry.id,
                    })))
                }
                // `*`, `/`, `^` and friends have no unary form.
                _ => Err(invalid()),
            };
        }

        let entry = self.registry.lookup(lexeme).ok_or_else(invalid)?;
        Ok(Some(Token::Operation(Operation {
            symbol: lexeme.to_string(),
            arity: entry.arity,
            is_prefix: false,
            id: entry.id,
        })))
    }

    /// Get the next classified lexeme from the source
    pub fn next_lexeme(&mut self) -> Option<Result<Lexeme, LexError>> {
        let source = self.source;
        loop {
            let raw = self.inner.next()?;
            let span = self.inner.span();
            let lexeme = &source[span.clone()];
            let location = self.sync_position_to(&span);

            let logos_token = match raw {
                Ok(token) => token,
                Err(()) => {
                    return Some(Err(LexError::InvalidToken {
                        text: lexeme.to_string(),
                        position: location,
                    }))
                }
            };

            trace!("Lexed {:?} '{}' at {}", logos_token, lexeme, location);

            let kind = match logos_token {
                LogosToken::LeftParen => LexemeKind::LeftParen,
                LogosToken::RightParen => LexemeKind::RightParen,
                LogosToken::Comma => LexemeKind::Comma,
                LogosToken::Word | LogosToken::ExponentWord => {
                    match classify::classify_word(lexeme, self.registry) {
                        Some(token) => LexemeKind::Token(token),
                        None => {
                            debug!("Rejected lexeme '{}' at {}", lexeme, location);
                            return Some(Err(LexError::InvalidToken {
                                text: lexeme.to_string(),
                                position: location,
                            }));
                        }
                    }
                }
                operator => {
                    let op = operator.operator_char()?;
                    match self.classify_operator(op, lexeme, location) {
                        Ok(Some(token)) => LexemeKind::Token(token),
                        Ok(None) => {
                            trace!("Dropping unary plus at {}", location);
                            continue;
                        }
                        Err(err) => return Some(Err(err)),
                    }
                }
            };

            return Some(Ok(Lexeme::new(kind, lexeme, location)));
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

// Include the test module
#[cfg(test)]
mod tests;
