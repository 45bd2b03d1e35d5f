/// Numeric conversion helpers.
///
/// This module provides safe functions for turning evaluated floating-point
/// results into integer indices without silent wrap-around. Every helper
/// returns a `Result` that is `Ok` only when the conversion is valid.
pub mod num;
