// Token stream as seen from outside the workspace

use calx::{LexemeKind, Lexer, OperationId, Token};
use pretty_assertions::assert_eq;

fn kinds(input: &str) -> Vec<LexemeKind> {
    Lexer::tokenize(input)
        .unwrap()
        .into_iter()
        .map(|lexeme| lexeme.kind)
        .collect()
}

fn operation_id(kind: &LexemeKind) -> Option<OperationId> {
    match kind {
        LexemeKind::Token(Token::Operation(op)) => Some(op.id),
        _ => None,
    }
}

#[test]
fn test_minus_roles_by_position() {
    let ids: Vec<_> = kinds("-a - (-b) * -c")
        .iter()
        .filter_map(operation_id)
        .collect();
    assert_eq!(
        ids,
        vec![
            OperationId::Negate,
            OperationId::Subtract,
            OperationId::Negate,
            OperationId::Multiply,
            OperationId::Negate,
        ]
    );
}

#[test]
fn test_function_arguments_and_commas() {
    let kinds = kinds("atan2(y, x)");
    assert_eq!(operation_id(&kinds[0]), Some(OperationId::Arctan2));
    assert_eq!(kinds[1], LexemeKind::LeftParen);
    assert_eq!(kinds[3], LexemeKind::Comma);
    assert_eq!(kinds[5], LexemeKind::RightParen);
    assert_eq!(kinds.len(), 6);
}

#[test]
fn test_scientific_literal_survives() {
    let kinds = kinds("1.2E-1+x");
    assert_eq!(
        kinds[0],
        LexemeKind::Token(Token::Number {
            text: "1.2E-1".to_string(),
            value: 0.12,
        })
    );
    assert_eq!(operation_id(&kinds[1]), Some(OperationId::Add));
}

#[test]
fn test_invalid_fragment_position() {
    let err = Lexer::tokenize("12+x-(3k*y^5)").unwrap_err();
    assert_eq!(err.offset(), 6);
}
