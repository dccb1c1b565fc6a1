/// Knobs for [`Parser`](super::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Fail on an unmatched `(`, `)` or `,` instead of tolerating it
    pub strict_parentheses: bool,
    /// Upper bound on the number of lexemes in one expression
    pub max_tokens: Option<usize>,
}

impl ParserConfig {
    /// Default configuration with strict parenthesis checking.
    pub fn strict() -> Self {
        Self {
            strict_parentheses: true,
            ..Self::default()
        }
    }

    pub fn with_max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = Some(limit);
        self
    }
}
