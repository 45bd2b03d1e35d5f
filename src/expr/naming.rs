use std::fmt::Display;

use crate::{operator::BinaryOperator, value::Scalar};

/// Removes every whitespace character from `name`.
///
/// # Example
/// ```
/// use lazyexpr::expr::naming::clean_name;
///
/// assert_eq!(clean_name("met > 200\t&& njets >= 4"), "met>200&&njets>=4");
/// ```
#[must_use]
pub fn clean_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Renders the canonical decimal text of a constant.
///
/// This is Rust's shortest round-trip formatting, so `3.5` renders as `3.5`
/// and `2.0` as `2`.
#[must_use]
pub fn constant_name(value: Scalar) -> String {
    format!("{value}")
}

/// Renders `(left)op(right)`.
#[must_use]
pub fn binary_name(left: &str, op: BinaryOperator, right: &str) -> String {
    format!("({left}){op}({right})")
}

/// Renders `op(operand)` for any prefix operator symbol.
#[must_use]
pub fn unary_name(op: impl Display, operand: &str) -> String {
    format!("{op}({operand})")
}

/// Renders `(vector)[index]`.
#[must_use]
pub fn index_name(vector: &str, index: &str) -> String {
    format!("({vector})[{index}]")
}
