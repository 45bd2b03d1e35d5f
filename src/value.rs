/// Result values and shapes.
///
/// Defines the numeric `Scalar` and `Sequence` types every evaluator produces,
/// the `ExprValue` enum wrapping either of them, the `Shape` tag used to
/// describe which evaluator a named expression carries, and the numeric
/// truthiness rules shared by all logical operators.
pub mod core;

pub use self::core::{ExprValue, Scalar, Sequence, Shape};
