use std::sync::Arc;

use crate::{
    error::EvalError,
    evaluator::{ScalarFn, VectorFn},
    util::num::f64_to_index_checked,
};

/// Builds a scalar evaluator returning the element of `vector` at the
/// position computed by `index`.
///
/// Per record, the sequence is evaluated first, then the position. A
/// position that addresses no element fails with
/// `EvalError::IndexOutOfBounds`, reported under `name`.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use lazyexpr::{combinator::element_index, error::EvalError};
///
/// let values: lazyexpr::evaluator::VectorFn<f64> = Arc::new(|_: &f64| Ok(vec![10.0, 20.0, 30.0]));
/// let position: lazyexpr::evaluator::ScalarFn<f64> = Arc::new(|r: &f64| Ok(*r));
///
/// let pick = element_index("(v)[i]".to_string(), &values, &position);
/// assert_eq!(pick(&1.0).unwrap(), 20.0);
/// assert!(matches!(pick(&5.0), Err(EvalError::IndexOutOfBounds { len: 3, .. })));
/// ```
#[must_use]
pub fn element_index<R: 'static>(name: String,
                                 vector: &VectorFn<R>,
                                 index: &ScalarFn<R>)
                                 -> ScalarFn<R> {
    let (vector, index) = (Arc::clone(vector), Arc::clone(index));
    Arc::new(move |r: &R| {
                 let values = vector(r)?;
                 let position = index(r)?;
                 let i = f64_to_index_checked(position, values.len(), || {
                             EvalError::IndexOutOfBounds { name:     name.clone(),
                                                           position,
                                                           len:      values.len(), }
                         })?;
                 Ok(values[i])
             })
}
