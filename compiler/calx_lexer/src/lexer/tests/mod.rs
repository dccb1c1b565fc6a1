use super::*;


/// Collects the lexemes of `input`, panicking on a lexing error.
fn lex(input: &str) -> Vec<Lexeme> {
    Lexer::tokenize(input).unwrap_or_else(|e| panic!("failed to lex {:?}: {}", input, e))
}

/// The source texts of the lexemes of `input`.
fn texts(input: &str) -> Vec<String> {
    lex(input).into_iter().map(|l| l.text).collect()
}
