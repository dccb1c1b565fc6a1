use calx_lexer::{LexError, Location};
use thiserror::Error;

/// Errors that abort a parse. No partial postfix queue is ever returned
/// alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A lexeme matched no recognised category
    #[error(transparent)]
    InvalidToken(#[from] LexError),

    /// A `(`, `)` or `,` without a partner; only raised in strict mode
    #[error("unbalanced parenthesis at {position}")]
    UnbalancedParenthesis { position: Location },

    /// The expression has more lexemes than the configured cap
    #[error("expression exceeds the limit of {limit} tokens")]
    TooManyTokens { limit: usize },
}

impl ParseError {
    /// Where the error was detected, when it is tied to a lexeme.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::InvalidToken(LexError::InvalidToken { position, .. }) => Some(*position),
            ParseError::UnbalancedParenthesis { position } => Some(*position),
            ParseError::TooManyTokens { .. } => None,
        }
    }

    /// Width of the offending text in characters, for caret rendering.
    fn width(&self) -> usize {
        match self {
            ParseError::InvalidToken(LexError::InvalidToken { text, .. }) => {
                text.chars().count().max(1)
            }
            _ => 1,
        }
    }

    /// Suggestion shown under the snippet
    fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidToken(_) => Some(
                "names start with a letter or '_' and a number cannot be followed directly by a name",
            ),
            ParseError::UnbalancedParenthesis { .. } => {
                Some("did you forget a matching parenthesis?")
            }
            ParseError::TooManyTokens { .. } => None,
        }
    }
}

/// Renders an error against the source line it points at:
///
/// ```text
/// error: invalid token '3k' at 1:7 (offset 6)
///   |
/// 1 | 12+x-(3k*y^5)
///   |       ^^
///   = help: ...
/// ```
pub fn render_snippet(source: &str, error: &ParseError) -> String {
    let mut out = format!("error: {error}\n");

    if let Some(location) = error.location() {
        let line_text = source
            .lines()
            .nth(location.line.saturating_sub(1))
            .unwrap_or_default();
        let gutter = " ".repeat(location.line.to_string().len());
        let pad = " ".repeat(location.column.saturating_sub(1));
        let carets = "^".repeat(error.width());

        out.push_str(&format!("{gutter} |\n"));
        out.push_str(&format!("{} | {}\n", location.line, line_text));
        out.push_str(&format!("{gutter} | {pad}{carets}\n"));

        if let Some(help) = error.help() {
            out.push_str(&format!("{gutter} = help: {help}\n"));
        }
    }

    out
}
