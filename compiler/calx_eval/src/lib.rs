//! Stack-machine evaluation of parsed calx expressions

pub mod bindings;
pub mod error;
pub mod evaluator;

pub use bindings::Bindings;
pub use error::EvalError;
pub use evaluator::{evaluate, Evaluator};
