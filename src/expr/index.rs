use tracing::trace;

use crate::{
    combinator::element_index,
    error::ComposeError,
    evaluator::Evaluator,
    expr::{core::NamedExpr, naming::index_name},
};

impl<R: 'static> NamedExpr<R> {
    /// Builds the scalar expression `(self)[index]`.
    ///
    /// For each record the new expression evaluates `self`'s sequence, then
    /// `index`, and returns the element at that position. Fractional
    /// positions are truncated toward zero.
    ///
    /// ## Errors
    /// - `ComposeError::IndexOnScalar` if `self` is a scalar.
    /// - `ComposeError::VectorIndexOperand` if `index` is a vector.
    /// - `ComposeError::UnsetOperand` if either side has no evaluator.
    ///
    /// Evaluating the result fails with `EvalError::IndexOutOfBounds` when the
    /// position does not address an element of that record's sequence.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::{NamedExpr, error::EvalError};
    ///
    /// let pt = NamedExpr::from_vector("pt", |_: &()| vec![10.0, 20.0, 30.0]);
    ///
    /// let second = pt.index(&NamedExpr::constant(1.0)).unwrap();
    /// assert_eq!(second.name(), "(pt)[1]");
    /// assert_eq!(second.evaluate_scalar(&()).unwrap(), 20.0);
    ///
    /// let missing = pt.index(&NamedExpr::constant(5.0)).unwrap();
    /// assert!(matches!(missing.evaluate_scalar(&()),
    ///                  Err(EvalError::IndexOutOfBounds { len: 3, .. })));
    /// ```
    pub fn index(&self, index: &Self) -> Result<Self, ComposeError> {
        let vector = match self.evaluator() {
            Evaluator::Vector(f) => f,
            Evaluator::Scalar(_) => {
                return Err(ComposeError::IndexOnScalar { name: self.name().to_string() });
            },
            Evaluator::Unset => {
                return Err(ComposeError::UnsetOperand { name: self.name().to_string() });
            },
        };
        let position = match index.evaluator() {
            Evaluator::Scalar(f) => f,
            Evaluator::Vector(_) => {
                return Err(ComposeError::VectorIndexOperand { name: index.name().to_string() });
            },
            Evaluator::Unset => {
                return Err(ComposeError::UnsetOperand { name: index.name().to_string() });
            },
        };

        let name = index_name(self.name(), index.name());
        trace!(%name, "composed index expression");
        let evaluator = element_index(name.clone(), vector, position);
        Ok(Self::from_evaluator(name, Evaluator::Scalar(evaluator)))
    }
}
