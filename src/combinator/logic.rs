use std::sync::Arc;

use crate::{
    combinator::binary::elementwise,
    evaluator::Evaluator,
    operator::BinaryOperator,
    value::core::{from_bool, is_true},
};

/// Builds the short-circuit `&&` of two evaluators.
///
/// - scalar `&&` scalar: the right side is not evaluated when the left is
///   false.
/// - false scalar `&&` vector: all false, as long as the vector. The vector is
///   still evaluated to learn its length; its values are discarded.
/// - true scalar `&&` vector: the vector's values, unchanged.
/// - vector `&&` scalar: the scalar is evaluated at most once, at the first
///   true element, and reads as false until then. It is never evaluated if
///   no element is true.
/// - vector `&&` vector: elementwise, truncated to the shorter length.
///
/// # Example
/// ```
/// use lazyexpr::{combinator::logical_and, evaluator::Evaluator};
///
/// let no = Evaluator::<()>::scalar(|_| Ok(0.0));
/// let flags = Evaluator::<()>::vector(|_| Ok(vec![1.0, 5.0, 0.0]));
///
/// let Evaluator::Vector(f) = logical_and(&no, &flags) else { unreachable!() };
/// assert_eq!(f(&()).unwrap(), vec![0.0, 0.0, 0.0]);
/// ```
#[must_use]
pub fn logical_and<R: 'static>(left: &Evaluator<R>, right: &Evaluator<R>) -> Evaluator<R> {
    short_circuit(BinaryOperator::And, left, right)
}

/// Builds the short-circuit `||` of two evaluators.
///
/// The dual of `logical_and`: a true scalar on the left gives all true (the
/// vector is still evaluated for its length), a false one forwards the vector
/// unchanged, and vector `||` scalar evaluates the scalar lazily at the first
/// false element.
///
/// # Example
/// ```
/// use lazyexpr::{combinator::logical_or, evaluator::Evaluator};
///
/// let flags = Evaluator::<()>::vector(|_| Ok(vec![1.0, 1.0]));
/// let never = Evaluator::<()>::scalar(|_| panic!("must not be evaluated"));
///
/// let Evaluator::Vector(f) = logical_or(&flags, &never) else { unreachable!() };
/// assert_eq!(f(&()).unwrap(), vec![1.0, 1.0]);
/// ```
#[must_use]
pub fn logical_or<R: 'static>(left: &Evaluator<R>, right: &Evaluator<R>) -> Evaluator<R> {
    short_circuit(BinaryOperator::Or, left, right)
}

/// Shared body of `&&` and `||`.
///
/// `decisive` is the left-hand truth value that settles the result on its
/// own: `false` for `&&`, `true` for `||`.
fn short_circuit<R: 'static>(op: BinaryOperator,
                             left: &Evaluator<R>,
                             right: &Evaluator<R>)
                             -> Evaluator<R> {
    let decisive = op == BinaryOperator::Or;

    match (left, right) {
        (Evaluator::Scalar(a), Evaluator::Scalar(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::scalar(move |r| {
                if is_true(a(r)?) == decisive {
                    return Ok(from_bool(decisive));
                }
                Ok(from_bool(is_true(b(r)?)))
            })
        },

        (Evaluator::Scalar(a), Evaluator::Vector(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::vector(move |r| {
                let sa = a(r)?;
                let vb = b(r)?;
                if is_true(sa) == decisive {
                    Ok(vec![from_bool(decisive); vb.len()])
                } else {
                    Ok(vb)
                }
            })
        },

        (Evaluator::Vector(a), Evaluator::Scalar(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::vector(move |r| {
                let va = a(r)?;
                let mut sb = None;
                let mut out = Vec::with_capacity(va.len());
                for x in va {
                    if is_true(x) == decisive {
                        out.push(from_bool(decisive));
                        continue;
                    }
                    if sb.is_none() {
                        sb = Some(b(r)?);
                    }
                    out.push(from_bool(sb.is_some_and(is_true)));
                }
                Ok(out)
            })
        },

        // Unset operands and vector with vector have no short circuit.
        _ => elementwise(op, left, right),
    }
}
