//! Math kernel and operation registry for calx
//!
//! The leaf of the pipeline: pure numeric functions with defined behaviour at
//! their domain edges, the closed set of operations the evaluator can
//! dispatch, and the process-wide table mapping operator symbols and function
//! names to those operations.

#![warn(missing_docs)]

pub mod error;
#[allow(missing_docs)]
pub mod kernel;
pub mod operation;
pub mod registry;

pub use error::MathError;
pub use operation::{Arity, OperationId};
pub use registry::{Registry, RegistryEntry, NEGATE};
