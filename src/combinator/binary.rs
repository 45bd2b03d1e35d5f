use std::sync::Arc;

use tracing::debug;

use crate::{
    combinator::logic::{logical_and, logical_or},
    evaluator::Evaluator,
    operator::BinaryOperator,
    value::{Scalar, Sequence},
};

/// Builds an evaluator applying a binary operator between two evaluators.
///
/// `&&` and `||` are routed to their short-circuit combinators; every other
/// operator uses `elementwise`.
///
/// # Example
/// ```
/// use lazyexpr::{
///     combinator::apply_binary,
///     evaluator::Evaluator,
///     operator::BinaryOperator,
/// };
///
/// let x = Evaluator::<f64>::scalar(|r| Ok(*r));
/// let three = Evaluator::<f64>::scalar(|_| Ok(3.0));
///
/// let Evaluator::Scalar(f) = apply_binary(BinaryOperator::Mul, &x, &three) else {
///     unreachable!()
/// };
/// assert_eq!(f(&2.0).unwrap(), 6.0);
/// ```
#[must_use]
pub fn apply_binary<R: 'static>(op: BinaryOperator,
                                left: &Evaluator<R>,
                                right: &Evaluator<R>)
                                -> Evaluator<R> {
    match op {
        BinaryOperator::And => logical_and(left, right),
        BinaryOperator::Or => logical_or(left, right),
        _ => elementwise(op, left, right),
    }
}

/// Applies `op` between two evaluators of any shape, without short-circuit.
///
/// The four shape combinations:
/// - scalar with scalar gives a scalar;
/// - scalar with vector broadcasts the scalar, evaluated once per record,
///   across every element;
/// - vector with scalar is the symmetric broadcast;
/// - vector with vector pairs elements by position and stops at the end of
///   the shorter sequence.
///
/// If either side is unset the result is unset.
///
/// # Example
/// ```
/// use lazyexpr::{
///     combinator::elementwise,
///     evaluator::Evaluator,
///     operator::BinaryOperator,
/// };
///
/// let a = Evaluator::<()>::vector(|_| Ok(vec![1.0, 2.0, 3.0]));
/// let b = Evaluator::<()>::vector(|_| Ok(vec![10.0, 20.0]));
///
/// let Evaluator::Vector(f) = elementwise(BinaryOperator::Add, &a, &b) else {
///     unreachable!()
/// };
/// assert_eq!(f(&()).unwrap(), vec![11.0, 22.0]);
/// ```
#[must_use]
pub fn elementwise<R: 'static>(op: BinaryOperator,
                               left: &Evaluator<R>,
                               right: &Evaluator<R>)
                               -> Evaluator<R> {
    match (left, right) {
        (Evaluator::Unset, _) | (_, Evaluator::Unset) => {
            debug!(%op,
                   left = %left.shape(),
                   right = %right.shape(),
                   "binary operator applied to an unset evaluator");
            Evaluator::Unset
        },

        (Evaluator::Scalar(a), Evaluator::Scalar(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::scalar(move |r| Ok(op.apply(a(r)?, b(r)?)))
        },

        (Evaluator::Scalar(a), Evaluator::Vector(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::vector(move |r| {
                let sa = a(r)?;
                Ok(b(r)?.into_iter().map(|e| op.apply(sa, e)).collect())
            })
        },

        (Evaluator::Vector(a), Evaluator::Scalar(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::vector(move |r| {
                let va = a(r)?;
                let sb = b(r)?;
                Ok(va.into_iter().map(|e| op.apply(e, sb)).collect())
            })
        },

        (Evaluator::Vector(a), Evaluator::Vector(b)) => {
            let (a, b) = (Arc::clone(a), Arc::clone(b));
            Evaluator::vector(move |r| {
                let va = a(r)?;
                let vb = b(r)?;
                Ok(zip_truncated(op, &va, &vb))
            })
        },
    }
}

/// Combines two sequences by position, stopping at the shorter one.
fn zip_truncated(op: BinaryOperator, left: &[Scalar], right: &[Scalar]) -> Sequence {
    left.iter().zip(right).map(|(&l, &r)| op.apply(l, r)).collect()
}
