//! Operation identifiers and arity-dispatched application.

use std::fmt;

use crate::error::MathError;
use crate::kernel;

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arity {
    /// One operand.
    One,
    /// Two operands.
    Two,
    /// Three operands.
    Three,
}

impl Arity {
    /// The operand count as a plain number.
    pub fn count(self) -> usize {
        match self {
            Arity::One => 1,
            Arity::Two => 2,
            Arity::Three => 3,
        }
    }
}

impl TryFrom<usize> for Arity {
    type Error = usize;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Arity::One),
            2 => Ok(Arity::Two),
            3 => Ok(Arity::Three),
            other => Err(other),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Every operation the math kernel knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum OperationId {
    // Unary
    Negate,
    Exponent,
    Sqrt,
    InverseSqrt,
    Absolute,
    Radians,
    Degrees,
    Sign,
    Round,
    Floor,
    Ceil,
    Fraction,
    Trunc,
    Sine,
    Cosine,
    Tangent,
    Sinh,
    Cosh,
    Tanh,
    Arcsine,
    Arccosine,
    Arctangent,

    // Binary
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Logarithm,
    Minimum,
    Maximum,
    LessThan,
    GreaterThan,
    Modulo,
    Snap,
    Arctan2,
    PingPong,

    // Ternary
    MultiplyAdd,
    Compare,
    SmoothMin,
    SmoothMax,
    Wrap,
}

impl OperationId {
    /// The number of operands this operation takes.
    pub fn arity(self) -> Arity {
        use OperationId::*;
        match self {
            Negate | Exponent | Sqrt | InverseSqrt | Absolute | Radians | Degrees | Sign
            | Round | Floor | Ceil | Fraction | Trunc | Sine | Cosine | Tangent | Sinh | Cosh
            | Tanh | Arcsine | Arccosine | Arctangent => Arity::One,
            Add | Subtract | Multiply | Divide | Power | Logarithm | Minimum | Maximum
            | LessThan | GreaterThan | Modulo | Snap | Arctan2 | PingPong => Arity::Two,
            MultiplyAdd | Compare | SmoothMin | SmoothMax | Wrap => Arity::Three,
        }
    }

    /// Stable lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        use OperationId::*;
        match self {
            Negate => "negate",
            Exponent => "exponent",
            Sqrt => "sqrt",
            InverseSqrt => "inverse_sqrt",
            Absolute => "absolute",
            Radians => "radians",
            Degrees => "degrees",
            Sign => "sign",
            Round => "round",
            Floor => "floor",
            Ceil => "ceil",
            Fraction => "fraction",
            Trunc => "trunc",
            Sine => "sine",
            Cosine => "cosine",
            Tangent => "tangent",
            Sinh => "sinh",
            Cosh => "cosh",
            Tanh => "tanh",
            Arcsine => "arcsine",
            Arccosine => "arccosine",
            Arctangent => "arctangent",
            Add => "add",
            Subtract => "subtract",
            Multiply => "multiply",
            Divide => "divide",
            Power => "power",
            Logarithm => "logarithm",
            Minimum => "minimum",
            Maximum => "maximum",
            LessThan => "less_than",
            GreaterThan => "greater_than",
            Modulo => "modulo",
            Snap => "snap",
            Arctan2 => "arctan2",
            PingPong => "pingpong",
            MultiplyAdd => "multiply_add",
            Compare => "compare",
            SmoothMin => "smooth_min",
            SmoothMax => "smooth_max",
            Wrap => "wrap",
        }
    }

    /// Applies the operation to `operands`, given in argument order.
    ///
    /// Fails with [`MathError::UnsupportedArity`] when the operand count does
    /// not match what the operation accepts.
    pub fn apply(self, operands: &[f64]) -> Result<f64, MathError> {
        let result = match *operands {
            [a] => self.apply_unary(a),
            [a, b] => self.apply_binary(a, b),
            [a, b, c] => self.apply_ternary(a, b, c),
            _ => None,
        };
        result.ok_or_else(|| MathError::UnsupportedArity {
            name: self.name().to_string(),
            arity: operands.len(),
        })
    }

    fn apply_unary(self, a: f64) -> Option<f64> {
        use OperationId::*;
        let value = match self {
            Negate => -a,
            Exponent => a.exp(),
            Sqrt => kernel::safe_sqrt(a),
            InverseSqrt => kernel::safe_inverse_sqrt(a),
            Absolute => a.abs(),
            Radians => kernel::deg2rad(a),
            Degrees => kernel::rad2deg(a),
            Sign => kernel::sign(a),
            Round => kernel::round(a),
            Floor => a.floor(),
            Ceil => a.ceil(),
            Fraction => kernel::fraction(a),
            Trunc => kernel::trunc(a),
            Sine => a.sin(),
            Cosine => a.cos(),
            Tangent => a.tan(),
            Sinh => a.sinh(),
            Cosh => a.cosh(),
            Tanh => a.tanh(),
            Arcsine => kernel::safe_asin(a),
            Arccosine => kernel::safe_acos(a),
            Arctangent => a.atan(),
            _ => return None,
        };
        Some(value)
    }

    fn apply_binary(self, a: f64, b: f64) -> Option<f64> {
        use OperationId::*;
        let value = match self {
            Add => a + b,
            Subtract => a - b,
            Multiply => a * b,
            Divide => kernel::safe_divide(a, b),
            Power => kernel::safe_power(a, b),
            Logarithm => kernel::safe_log(a, b),
            Minimum => a.min(b),
            Maximum => a.max(b),
            LessThan => kernel::less_than(a, b),
            GreaterThan => kernel::greater_than(a, b),
            Modulo => kernel::safe_modulo(a, b),
            Snap => kernel::snap(a, b),
            Arctan2 => a.atan2(b),
            PingPong => kernel::pingpong(a, b),
            _ => return None,
        };
        Some(value)
    }

    fn apply_ternary(self, a: f64, b: f64, c: f64) -> Option<f64> {
        use OperationId::*;
        let value = match self {
            MultiplyAdd => a * b + c,
            Compare => kernel::compare(a, b, c),
            SmoothMin => kernel::smooth_min(a, b, c),
            SmoothMax => kernel::smooth_max(a, b, c),
            Wrap => kernel::wrap(a, b, c),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
