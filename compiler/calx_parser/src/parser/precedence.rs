//! Operator metadata for the shunting-yard pass.
//!
//! Lower precedence values bind tighter. Only single-character infix symbols
//! have a row in the table; named functions, and any symbol without a row,
//! fall back to the sentinel row, which binds tightest of all. Unary minus
//! has a row of its own.

use calx_lexer::Operation;

/// Tie-break rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// Precedence and associativity of one operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDetails {
    pub symbol: char,
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorDetails {
    const fn new(symbol: char, precedence: u8, associativity: Associativity) -> Self {
        Self {
            symbol,
            precedence,
            associativity,
        }
    }
}

/// Row used for functions and for anything missing from the table.
pub const SENTINEL: OperatorDetails = OperatorDetails::new('_', 0, Associativity::Right);

/// Row for unary minus. It shares the multiplicative level but is
/// right-associative, so a stacked negation yields to `^` and is popped by
/// `* / %`: `-a^b` is `-(a^b)` and `a^-b*c` is `(a^(-b))*c`.
pub const PREFIX_MINUS: OperatorDetails = OperatorDetails::new('-', 3, Associativity::Right);

pub const OPERATORS_DETAILS: &[OperatorDetails] = &[
    OperatorDetails::new('^', 2, Associativity::Right),
    OperatorDetails::new('%', 3, Associativity::Left),
    OperatorDetails::new('/', 3, Associativity::Left),
    OperatorDetails::new('*', 3, Associativity::Left),
    OperatorDetails::new('-', 4, Associativity::Left),
    OperatorDetails::new('+', 4, Associativity::Left),
    OperatorDetails::new('<', 5, Associativity::Left),
    OperatorDetails::new('>', 5, Associativity::Left),
];

/// Looks up the row for a single symbol.
pub fn details_for_symbol(symbol: char) -> OperatorDetails {
    OPERATORS_DETAILS
        .iter()
        .find(|details| details.symbol == symbol)
        .copied()
        .unwrap_or(SENTINEL)
}

/// Looks up the row for an operation. Named functions always get the
/// sentinel.
pub fn details_for(operation: &Operation) -> OperatorDetails {
    match operation.symbol_char() {
        Some('-') if operation.is_prefix => PREFIX_MINUS,
        Some(symbol) => details_for_symbol(symbol),
        None => SENTINEL,
    }
}

/// Whether `current` should be pushed on top of `top` rather than forcing
/// `top` out to the queue first.
pub fn has_precedence(top: &Operation, current: &Operation) -> bool {
    let top = details_for(top);
    let current = details_for(current);

    if top.precedence == current.precedence {
        current.associativity == Associativity::Right
    } else {
        current.precedence < top.precedence
    }
}
