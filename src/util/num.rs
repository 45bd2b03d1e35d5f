/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an evaluated `f64` position into an index into a sequence of
/// length `len`.
///
/// Fractional positions are truncated toward zero, so `1.9` addresses
/// element `1`. A position addresses nothing when it is non-finite, negative
/// (after truncation `-0.5` is `0` and is accepted), beyond
/// `MAX_SAFE_U64_INT`, or not below `len`.
///
/// ## Errors
/// Returns `Err(error())` when the position addresses no element.
///
/// ## Parameters
/// - `position`: The evaluated index.
/// - `len`: The length of the sequence being indexed.
/// - `error`: Builds the error to return for a bad position.
///
/// ## Example
/// ```
/// use lazyexpr::util::num::f64_to_index_checked;
///
/// assert_eq!(f64_to_index_checked(1.0, 3, || "bad"), Ok(1));
/// assert_eq!(f64_to_index_checked(2.7, 3, || "bad"), Ok(2));
/// assert_eq!(f64_to_index_checked(3.0, 3, || "bad"), Err("bad"));
/// assert_eq!(f64_to_index_checked(-1.0, 3, || "bad"), Err("bad"));
/// assert_eq!(f64_to_index_checked(f64::NAN, 3, || "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_index_checked<E>(position: f64,
                               len: usize,
                               error: impl FnOnce() -> E)
                               -> Result<usize, E> {
    let truncated = position.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > MAX_SAFE_U64_INT as f64 {
        return Err(error());
    }

    match usize::try_from(truncated as u64) {
        Ok(index) if index < len => Ok(index),
        _ => Err(error()),
    }
}
