/// The `NamedExpr` type and its construction, mutation and evaluation.
///
/// A named expression owns at most one evaluator (scalar or vector) and a
/// whitespace-free display name, normally derived mechanically from the
/// operators that built it.
pub mod core;

/// Name derivation.
///
/// Renders the names of composed expressions: `(f)op(g)` for binary
/// operators, `op(f)` for unary ones and `(v)[i]` for indexing, with all
/// whitespace removed.
pub mod naming;

/// Operator entry points.
///
/// Exposes every operator as a named method (`binary`, `less`, `and`, ...)
/// and as Rust operator syntax (`+`, `-=`, `!`, ...), delegating to the
/// combinator library.
pub mod ops;

/// The indexing operator.
///
/// Selects one element of a vector expression at a position computed by a
/// scalar expression.
pub mod index;

pub use self::core::NamedExpr;
