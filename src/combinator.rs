/// Unary combinators.
///
/// Applies negation or logical NOT to a scalar evaluator, or elementwise to a
/// vector evaluator, preserving order and length.
pub mod unary;

/// Binary combinators.
///
/// Combines two evaluators of any shape with an arithmetic or comparison
/// operator: scalars broadcast across vectors, and two vectors are zipped and
/// truncated to the shorter length. Logical operators are routed to `logic`.
pub mod binary;

/// Short-circuit logical combinators.
///
/// Implements `&&` and `||` with the evaluation order users expect from
/// boolean expressions, including the scalar/vector cases.
pub mod logic;

/// Element selection.
///
/// Builds a scalar evaluator picking one element of a vector evaluator at a
/// position computed by a scalar evaluator.
pub mod index;

pub use binary::{apply_binary, elementwise};
pub use index::element_index;
pub use logic::{logical_and, logical_or};
pub use unary::apply_unary;
