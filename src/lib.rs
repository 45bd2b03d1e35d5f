//! # lazyexpr
//!
//! lazyexpr composes named, lazily evaluated expressions over an opaque
//! per-record input. A [`NamedExpr`] pairs a scalar or vector function of the
//! record with a display name; operators combine expressions into new ones
//! without computing anything, and evaluation walks the composed closures for
//! one record at a time.
//!
//! ```
//! use lazyexpr::NamedExpr;
//!
//! struct Event {
//!     jet_pt: Vec<f64>,
//!     ht:     f64,
//! }
//!
//! let jet_pt = NamedExpr::from_vector("jet_pt", |e: &Event| e.jet_pt.clone());
//! let ht = NamedExpr::from_scalar("ht", |e: &Event| e.ht);
//!
//! let selection = ht.greater(&NamedExpr::constant(500.0))
//!                   .and(&jet_pt.greater(&NamedExpr::constant(30.0)));
//!
//! let event = Event { jet_pt: vec![45.0, 20.0],
//!                     ht:     650.0, };
//! assert_eq!(selection.name(), "((ht)>(500))&&((jet_pt)>(30))");
//! assert_eq!(selection.evaluate_vector(&event).unwrap(), vec![1.0, 0.0]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Reductions over evaluation results.
///
/// Provides the existence test over one sequence and the multi-criterion
/// per-sub-object pass test over several sequences of the same record.
///
/// # Responsibilities
/// - Decides whether any element of a sequence is true.
/// - Decides whether some sub-object passes every criterion, tolerating
///   sequences of different lengths.
pub mod aggregate;
/// Pure functions building evaluators from evaluators.
///
/// This module holds the algorithmic core: how scalar and vector operands
/// combine under every operator, including broadcast, truncation and
/// short-circuit evaluation.
///
/// # Responsibilities
/// - Applies unary and binary operators to evaluators of any shape.
/// - Preserves the short-circuit order of `&&` and `||`.
/// - Builds the element selection used by the indexing operator.
pub mod combinator;
/// Provides the error types for composition and evaluation.
///
/// # Responsibilities
/// - Reports shape violations while composing expressions.
/// - Reports variant mismatches and bad indices while evaluating.
pub mod error;
/// The callable half of a named expression.
///
/// Declares the `Evaluator` sum type together with the shared function types
/// it wraps.
pub mod evaluator;
/// Named expressions.
///
/// # Responsibilities
/// - Constructs leaf expressions from functions, constants or text.
/// - Keeps the name and the evaluator in step under every operator.
/// - Evaluates expressions against records.
pub mod expr;
/// Operator definitions.
///
/// Declares the binary and unary operators, their display symbols and their
/// scalar semantics.
pub mod operator;
/// The boundary to an external grammar parser.
pub mod parser;
/// General utilities for safe numeric conversion.
pub mod util;
/// Result values, shapes and truthiness.
pub mod value;

pub use error::{ComposeError, EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use expr::NamedExpr;
pub use value::{ExprValue, Scalar, Sequence, Shape};
