/// Composition errors.
///
/// Defines the errors raised while building a new named expression from
/// existing ones, before any record is seen. These are shape violations of an
/// operator's contract, such as indexing a scalar.
pub mod compose_error;
/// Evaluation errors.
///
/// Contains the errors raised while evaluating a named expression against a
/// record: querying the wrong evaluator variant, or an index that falls
/// outside the sequence produced for that record.
pub mod eval_error;

pub use compose_error::ComposeError;
pub use eval_error::{EvalError, EvalResult};
