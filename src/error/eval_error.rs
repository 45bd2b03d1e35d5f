use thiserror::Error;

use crate::value::Shape;

/// Result type used by every evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating against a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The scalar accessor was used on an expression that is not scalar, or
    /// the vector accessor on one that is not a vector.
    #[error("expression '{name}' is {found}, but a {expected} result was requested")]
    VariantMismatch {
        /// The name of the queried expression.
        name:     String,
        /// The shape the caller asked for.
        expected: Shape,
        /// The shape the expression actually has.
        found:    Shape,
    },
    /// The expression has no evaluator to call.
    #[error("expression '{name}' has no evaluator")]
    Unset {
        /// The name of the queried expression.
        name: String,
    },
    /// An evaluated index does not address an element of the evaluated
    /// sequence.
    #[error("index {position} out of bounds for '{name}' of length {len}")]
    IndexOutOfBounds {
        /// The name of the indexing expression.
        name:     String,
        /// The evaluated index position.
        position: f64,
        /// The length of the evaluated sequence.
        len:      usize,
    },
}
