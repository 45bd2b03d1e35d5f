use std::sync::Arc;

use tracing::debug;

use crate::{evaluator::Evaluator, operator::UnaryOperator};

/// Builds an evaluator applying a unary operator to `operand`.
///
/// - A scalar operand gives `r -> op(f(r))`.
/// - A vector operand gives `r -> map(op, f(r))`, keeping order and length.
/// - An unset operand gives an unset evaluator.
///
/// # Example
/// ```
/// use lazyexpr::{
///     combinator::apply_unary,
///     evaluator::Evaluator,
///     operator::UnaryOperator,
/// };
///
/// let values = Evaluator::<Vec<f64>>::vector(|r| Ok(r.clone()));
/// let negated = apply_unary(UnaryOperator::Negate, &values);
///
/// let Evaluator::Vector(f) = negated else { unreachable!() };
/// assert_eq!(f(&vec![1.0, -2.0]).unwrap(), vec![-1.0, 2.0]);
/// ```
#[must_use]
pub fn apply_unary<R: 'static>(op: UnaryOperator, operand: &Evaluator<R>) -> Evaluator<R> {
    match operand {
        Evaluator::Unset => {
            debug!(%op, "unary operator applied to an unset evaluator");
            Evaluator::Unset
        },
        Evaluator::Scalar(f) => {
            let f = Arc::clone(f);
            Evaluator::scalar(move |r| Ok(op.apply(f(r)?)))
        },
        Evaluator::Vector(f) => {
            let f = Arc::clone(f);
            Evaluator::vector(move |r| {
                let mut values = f(r)?;
                for x in &mut values {
                    *x = op.apply(*x);
                }
                Ok(values)
            })
        },
    }
}
