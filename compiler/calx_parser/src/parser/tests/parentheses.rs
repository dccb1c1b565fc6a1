use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_grouping() {
    assert_eq!(postfix("A * (B + C)"), "A B C + *");
    assert_eq!(postfix("(A + B) * (C - D)"), "A B + C D - *");
}

#[test]
fn test_operators_inside_parentheses_stay_inside() {
    // Popping stops at the open parenthesis.
    assert_eq!(postfix("(1 * 2 + 3)"), "1 2 * 3 +");
    assert_eq!(postfix("a - (b * c - d)"), "a b c * d - -");
}

#[test]
fn test_nested() {
    assert_eq!(postfix("((a))"), "a");
    assert_eq!(postfix("2 ^ (1 + (3 - x))"), "2 1 3 x - + ^");
}

#[test]
fn test_lenient_unmatched_close() {
    assert_eq!(postfix("a + b)"), "a b +");
    assert_eq!(postfix(") a"), "a");
}

#[test]
fn test_lenient_unmatched_open() {
    assert_eq!(postfix("(a + b"), "a b +");
    assert_eq!(postfix("a * (b"), "a b *");
}

#[test]
fn test_strict_unmatched_close() {
    let mut parser = Parser::with_config(ParserConfig::strict());
    let err = parser.parse("a + b)").unwrap_err();
    match err {
        ParseError::UnbalancedParenthesis { position } => {
            assert_eq!(position.offset, 5);
            assert_eq!(position.column, 6);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_strict_unmatched_open() {
    let mut parser = Parser::with_config(ParserConfig::strict());
    let err = parser.parse("a * (b").unwrap_err();
    assert_eq!(err.location().map(|l| l.offset), Some(4));
}

#[test]
fn test_strict_stray_comma() {
    let mut parser = Parser::with_config(ParserConfig::strict());
    assert!(matches!(
        parser.parse("a, b"),
        Err(ParseError::UnbalancedParenthesis { .. })
    ));
    assert!(parser.parse("max(a, b)").is_ok());
}
