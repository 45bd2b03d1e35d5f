use std::sync::Arc;

use crate::{
    error::EvalResult,
    value::{Scalar, Sequence, Shape},
};

/// A shareable function computing one number from a record.
pub type ScalarFn<R> = Arc<dyn Fn(&R) -> EvalResult<Scalar> + Send + Sync>;

/// A shareable function computing a sequence of numbers from a record.
pub type VectorFn<R> = Arc<dyn Fn(&R) -> EvalResult<Sequence> + Send + Sync>;

/// The callable half of a named expression.
///
/// Holds at most one evaluator: a scalar one, a vector one, or nothing. The
/// functions are immutable once built, so cloning an `Evaluator` hands out
/// another handle to the same pure function and never shares mutable state.
pub enum Evaluator<R> {
    /// No evaluator installed.
    Unset,
    /// Record to single number.
    Scalar(ScalarFn<R>),
    /// Record to sequence of numbers.
    Vector(VectorFn<R>),
}

impl<R> Clone for Evaluator<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Unset => Self::Unset,
            Self::Scalar(f) => Self::Scalar(Arc::clone(f)),
            Self::Vector(f) => Self::Vector(Arc::clone(f)),
        }
    }
}

impl<R> Default for Evaluator<R> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<R> std::fmt::Debug for Evaluator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Evaluator::{}", self.shape())
    }
}

impl<R> Evaluator<R> {
    /// Returns which variant is populated.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Unset => Shape::Unset,
            Self::Scalar(_) => Shape::Scalar,
            Self::Vector(_) => Shape::Vector,
        }
    }

    /// Returns `true` unless this is `Evaluator::Unset`.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl<R: 'static> Evaluator<R> {
    /// Wraps a fallible scalar function.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::evaluator::Evaluator;
    ///
    /// let half = Evaluator::<f64>::scalar(|x| Ok(x / 2.0));
    /// assert!(matches!(half, Evaluator::Scalar(_)));
    /// ```
    pub fn scalar<F>(f: F) -> Self
        where F: Fn(&R) -> EvalResult<Scalar> + Send + Sync + 'static
    {
        Self::Scalar(Arc::new(f))
    }

    /// Wraps a fallible vector function.
    pub fn vector<F>(f: F) -> Self
        where F: Fn(&R) -> EvalResult<Sequence> + Send + Sync + 'static
    {
        Self::Vector(Arc::new(f))
    }
}
