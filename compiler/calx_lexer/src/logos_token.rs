use logos::Logos;

/// Raw lexeme boundaries, before classification.
///
/// A boundary falls at every operator or punctuation character and at
/// whitespace. Everything else between two boundaries is one `Word`, so a
/// fragment such as `3k` stays in one piece and is rejected as a whole by
/// the classifier instead of being split into `3` and `k`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogosToken {
    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    // Punctuation
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,

    // A word whose exponent carries a sign, e.g. `1.2E-1`. The sign would
    // otherwise end the word, so this keeps the literal intact. It is always
    // longer than the plain `Word` prefix it shares.
    #[regex(r"([0-9][0-9.]*|\.[0-9][0-9.]*)[eE][+-][^ \t\r\n\f+\-*/%^<>(),]*")]
    ExponentWord,

    // Numbers, names and anything else up to the next boundary
    #[regex(r"[^ \t\r\n\f+\-*/%^<>(),]+")]
    Word,
}

impl LogosToken {
    /// The operator character for operator tokens.
    pub fn operator_char(self) -> Option<char> {
        match self {
            LogosToken::Plus => Some('+'),
            LogosToken::Minus => Some('-'),
            LogosToken::Star => Some('*'),
            LogosToken::Slash => Some('/'),
            LogosToken::Percent => Some('%'),
            LogosToken::Caret => Some('^'),
            LogosToken::Less => Some('<'),
            LogosToken::Greater => Some('>'),
            _ => None,
        }
    }
}

/// Characters that end a word; the lookback for unary detection treats all
/// of them except `)` as "an operand is expected next".
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '^' | '<' | '>' | '(' | ')' | ','
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex(input: &str) -> Vec<(LogosToken, &str)> {
        let mut lexer = LogosToken::lexer(input);
        let mut out = Vec::new();
        while let Some(token) = lexer.next() {
            out.push((token.expect("every character belongs to some token"), lexer.slice()));
        }
        out
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(
            lex("12+x-(3*y^5)"),
            vec![
                (LogosToken::Word, "12"),
                (LogosToken::Plus, "+"),
                (LogosToken::Word, "x"),
                (LogosToken::Minus, "-"),
                (LogosToken::LeftParen, "("),
                (LogosToken::Word, "3"),
                (LogosToken::Star, "*"),
                (LogosToken::Word, "y"),
                (LogosToken::Caret, "^"),
                (LogosToken::Word, "5"),
                (LogosToken::RightParen, ")"),
            ]
        );
    }

    #[test]
    fn test_signed_exponent_is_not_split() {
        assert_eq!(
            lex("1.2E-1+x"),
            vec![
                (LogosToken::ExponentWord, "1.2E-1"),
                (LogosToken::Plus, "+"),
                (LogosToken::Word, "x"),
            ]
        );
        assert_eq!(lex("2e+10"), vec![(LogosToken::ExponentWord, "2e+10")]);
        assert_eq!(lex(".5e-3"), vec![(LogosToken::ExponentWord, ".5e-3")]);
    }

    #[test]
    fn test_exponent_requires_leading_digit() {
        // `x2e` is a name, so the `-` is subtraction.
        assert_eq!(
            lex("x2e-3"),
            vec![
                (LogosToken::Word, "x2e"),
                (LogosToken::Minus, "-"),
                (LogosToken::Word, "3"),
            ]
        );
    }

    #[test]
    fn test_adjacent_letters_stay_in_word() {
        assert_eq!(lex("3k"), vec![(LogosToken::Word, "3k")]);
        assert_eq!(lex("a#b"), vec![(LogosToken::Word, "a#b")]);
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            lex(" a \t, b "),
            vec![
                (LogosToken::Word, "a"),
                (LogosToken::Comma, ","),
                (LogosToken::Word, "b"),
            ]
        );
    }
}
