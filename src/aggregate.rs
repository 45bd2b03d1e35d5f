use crate::{
    error::EvalResult,
    expr::NamedExpr,
    value::{ExprValue, Scalar, core::is_true},
};

/// Returns `true` if any element is nonzero.
///
/// # Example
/// ```
/// use lazyexpr::aggregate::any_true;
///
/// assert!(any_true(&[0.0, 0.0, 1.0]));
/// assert!(!any_true(&[]));
/// ```
#[must_use]
pub fn any_true(values: &[Scalar]) -> bool {
    values.iter().any(|&v| is_true(v))
}

/// Returns `true` if at least one sub-object passes every criterion.
///
/// Each sequence holds the pass/fail flags of one criterion for the
/// sub-objects of the same record. The sequences may have different lengths;
/// only indices valid in all of them are considered. An empty collection
/// never passes.
///
/// # Example
/// ```
/// use lazyexpr::aggregate::all_subobjects_pass;
///
/// assert!(all_subobjects_pass(&[vec![1.0, 0.0, 1.0], vec![1.0, 1.0]]));
/// assert!(!all_subobjects_pass(&[vec![0.0, 1.0], vec![1.0, 0.0]]));
/// assert!(!all_subobjects_pass::<Vec<f64>>(&[]));
/// ```
#[must_use]
pub fn all_subobjects_pass<S: AsRef<[Scalar]>>(sequences: &[S]) -> bool {
    let Some(shortest) = sequences.iter().map(|s| s.as_ref().len()).min() else {
        return false;
    };

    (0..shortest).any(|i| sequences.iter().all(|s| is_true(s.as_ref()[i])))
}

/// Evaluates several selections on one record and reports whether some
/// sub-object passes all of them.
///
/// Vector expressions are combined with `all_subobjects_pass`. Scalar
/// expressions apply to every sub-object, so they only veto the result when
/// false. With scalars alone, the result is whether all of them are true.
/// Every expression is evaluated, in order, before the result is decided.
///
/// ## Errors
/// The first evaluation error, including `EvalError::Unset` for an
/// expression without an evaluator.
///
/// # Example
/// ```
/// use lazyexpr::{NamedExpr, aggregate::evaluate_all_pass};
///
/// struct Event {
///     pt:  Vec<f64>,
///     eta: Vec<f64>,
/// }
///
/// let pt = NamedExpr::from_vector("pt", |e: &Event| e.pt.clone());
/// let eta = NamedExpr::from_vector("eta", |e: &Event| e.eta.clone());
/// let cuts = [pt.greater(&NamedExpr::constant(30.0)),
///             eta.less(&NamedExpr::constant(2.4))];
///
/// let event = Event { pt:  vec![50.0, 40.0],
///                     eta: vec![3.0, 1.0], };
/// assert!(evaluate_all_pass(&cuts, &event).unwrap());
/// ```
pub fn evaluate_all_pass<R>(exprs: &[NamedExpr<R>], record: &R) -> EvalResult<bool> {
    let mut sequences = Vec::new();
    let mut scalars_pass = true;

    for expr in exprs {
        match expr.evaluate(record)? {
            ExprValue::Scalar(v) => scalars_pass &= is_true(v),
            ExprValue::Sequence(v) => sequences.push(v),
        }
    }

    if exprs.is_empty() || !scalars_pass {
        return Ok(false);
    }
    if sequences.is_empty() {
        return Ok(true);
    }
    Ok(all_subobjects_pass(&sequences))
}
