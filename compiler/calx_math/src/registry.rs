//! Process-wide table of recognised operators, functions and constants.
//!
//! The builtin registry is built once on first use and never mutated, so it
//! can be shared freely between threads and parser instances.

use std::collections::HashMap;
use std::f64::consts;

use lazy_static::lazy_static;
use log::debug;

use crate::error::MathError;
use crate::operation::{Arity, OperationId};

/// Registry name of the unary minus operation.
///
/// Kept distinct from the binary `-` entry so both can live in one table.
pub const NEGATE: &str = "negate";

/// Symbolic operators and named functions, with their declared operand counts.
pub const BUILTIN_OPERATIONS: &[(&str, OperationId, usize)] = &[
    // Symbolic operators
    ("+", OperationId::Add, 2),
    ("-", OperationId::Subtract, 2),
    ("*", OperationId::Multiply, 2),
    ("/", OperationId::Divide, 2),
    ("%", OperationId::Modulo, 2),
    ("^", OperationId::Power, 2),
    ("<", OperationId::LessThan, 2),
    (">", OperationId::GreaterThan, 2),
    (NEGATE, OperationId::Negate, 1),
    // Single argument functions
    ("sin", OperationId::Sine, 1),
    ("cos", OperationId::Cosine, 1),
    ("tan", OperationId::Tangent, 1),
    ("sinh", OperationId::Sinh, 1),
    ("cosh", OperationId::Cosh, 1),
    ("tanh", OperationId::Tanh, 1),
    ("asin", OperationId::Arcsine, 1),
    ("acos", OperationId::Arccosine, 1),
    ("arctan", OperationId::Arctangent, 1),
    ("abs", OperationId::Absolute, 1),
    ("exp", OperationId::Exponent, 1),
    ("sign", OperationId::Sign, 1),
    ("round", OperationId::Round, 1),
    ("floor", OperationId::Floor, 1),
    ("ceil", OperationId::Ceil, 1),
    ("fraction", OperationId::Fraction, 1),
    ("trunc", OperationId::Trunc, 1),
    ("sqrt", OperationId::Sqrt, 1),
    ("isqrt", OperationId::InverseSqrt, 1),
    ("deg2rad", OperationId::Radians, 1),
    ("rad2deg", OperationId::Degrees, 1),
    // Two argument functions
    ("log", OperationId::Logarithm, 2),
    ("min", OperationId::Minimum, 2),
    ("max", OperationId::Maximum, 2),
    ("mod", OperationId::Modulo, 2),
    ("snap", OperationId::Snap, 2),
    ("atan2", OperationId::Arctan2, 2),
    ("pingpong", OperationId::PingPong, 2),
    // Three argument functions
    ("compare", OperationId::Compare, 3),
    ("smoothmin", OperationId::SmoothMin, 3),
    ("smoothmax", OperationId::SmoothMax, 3),
    ("wrap", OperationId::Wrap, 3),
    ("muladd", OperationId::MultiplyAdd, 3),
];

/// Named constants, resolved to numbers at tokenization time.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

lazy_static! {
    static ref BUILTIN: Registry = Registry::from_table(BUILTIN_OPERATIONS, BUILTIN_CONSTANTS)
        .expect("builtin operation table declares a consistent arity for every entry");
}

/// A resolved registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// The operation the kernel dispatches to.
    pub id: OperationId,
    /// Number of operands consumed from the evaluation stack.
    pub arity: Arity,
}

/// Immutable mapping from operator symbols and function names to operations.
#[derive(Debug, Clone)]
pub struct Registry {
    operations: HashMap<String, RegistryEntry>,
    constants: HashMap<String, f64>,
}

impl Registry {
    /// The shared builtin registry.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Builds a registry from raw `(name, operation, arity)` rows.
    ///
    /// Every row must declare an arity of 1, 2 or 3 that agrees with the
    /// operation it names; anything else fails with
    /// [`MathError::UnsupportedArity`].
    pub fn from_table(
        operations: &[(&str, OperationId, usize)],
        constants: &[(&str, f64)],
    ) -> Result<Self, MathError> {
        let mut table = HashMap::with_capacity(operations.len());
        for &(name, id, declared) in operations {
            let arity = Arity::try_from(declared)
                .ok()
                .filter(|arity| *arity == id.arity())
                .ok_or_else(|| MathError::UnsupportedArity {
                    name: name.to_string(),
                    arity: declared,
                })?;
            table.insert(name.to_string(), RegistryEntry { id, arity });
        }

        let constants: HashMap<String, f64> = constants
            .iter()
            .map(|&(name, value)| (name.to_string(), value))
            .collect();

        debug!(
            "Built operation registry: {} operations, {} constants",
            table.len(),
            constants.len()
        );

        Ok(Self {
            operations: table,
            constants,
        })
    }

    /// Looks up an operator symbol or function name.
    pub fn lookup(&self, name: &str) -> Option<RegistryEntry> {
        self.operations.get(name).copied()
    }

    /// Looks up a named constant such as `pi`.
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// The unary minus entry.
    pub fn negate(&self) -> Option<RegistryEntry> {
        self.lookup(NEGATE)
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the registry has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
