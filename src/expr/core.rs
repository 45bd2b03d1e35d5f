use tracing::debug;

use crate::{
    error::{EvalError, EvalResult},
    evaluator::{Evaluator, ScalarFn, VectorFn},
    expr::naming::{clean_name, constant_name},
    value::{ExprValue, Scalar, Sequence, Shape},
};

/// A lazily evaluated function of a record, paired with its display name.
///
/// `R` is the opaque per-record input. Nothing is computed when expressions
/// are built or combined; every call to one of the `evaluate*` methods walks
/// the closure tree for the supplied record, once, without caching.
///
/// ## Invariants
/// - At most one evaluator variant is populated. Installing one replaces the
///   other.
/// - The name never contains whitespace.
///
/// Cloning is cheap: evaluators are shared, immutable functions.
///
/// # Example
/// ```
/// use lazyexpr::NamedExpr;
///
/// struct Event {
///     met: f64,
/// }
///
/// let met = NamedExpr::from_scalar("met", |e: &Event| e.met);
/// let cut = met.greater(&NamedExpr::constant(200.0));
///
/// assert_eq!(cut.name(), "(met)>(200)");
/// assert_eq!(cut.evaluate_scalar(&Event { met: 250.0 }).unwrap(), 1.0);
/// ```
pub struct NamedExpr<R> {
    name:      String,
    evaluator: Evaluator<R>,
}

impl<R> Clone for NamedExpr<R> {
    fn clone(&self) -> Self {
        Self { name:      self.name.clone(),
               evaluator: self.evaluator.clone(), }
    }
}

impl<R> std::fmt::Debug for NamedExpr<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedExpr")
         .field("name", &self.name)
         .field("shape", &self.evaluator.shape())
         .finish()
    }
}

impl<R> std::fmt::Display for NamedExpr<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<R: 'static> From<Scalar> for NamedExpr<R> {
    fn from(value: Scalar) -> Self {
        Self::constant(value)
    }
}

impl<R> NamedExpr<R> {
    /// Creates an expression from a raw name and evaluator pair.
    ///
    /// Whitespace is stripped from the name. This is the constructor parser
    /// implementations and fallible leaves use.
    pub fn from_evaluator(name: impl AsRef<str>, evaluator: Evaluator<R>) -> Self {
        Self { name: clean_name(name.as_ref()),
               evaluator }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name, leaving the evaluator untouched.
    ///
    /// The new name is no longer derived from the evaluator; later operators
    /// derive their names from it as given.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::NamedExpr;
    ///
    /// let mut x = NamedExpr::<()>::constant(1.0);
    /// x.rename("one unit");
    /// assert_eq!(x.name(), "oneunit");
    /// ```
    pub fn rename(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.name = clean_name(name.as_ref());
        self
    }

    /// Returns the evaluator.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator<R> {
        &self.evaluator
    }

    /// Returns the scalar function, if that is the populated variant.
    #[must_use]
    pub const fn scalar_function(&self) -> Option<&ScalarFn<R>> {
        match &self.evaluator {
            Evaluator::Scalar(f) => Some(f),
            _ => None,
        }
    }

    /// Returns the vector function, if that is the populated variant.
    #[must_use]
    pub const fn vector_function(&self) -> Option<&VectorFn<R>> {
        match &self.evaluator {
            Evaluator::Vector(f) => Some(f),
            _ => None,
        }
    }

    /// Returns which evaluator variant is populated.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.evaluator.shape()
    }

    /// Returns `true` if the scalar evaluator is populated.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self.evaluator, Evaluator::Scalar(_))
    }

    /// Returns `true` if the vector evaluator is populated.
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self.evaluator, Evaluator::Vector(_))
    }

    /// Installs `evaluator`, replacing whichever variant was populated.
    ///
    /// Installing `Evaluator::Unset` is a no-op, so the result of a combinator
    /// can be passed through without checking it first.
    pub fn set_evaluator(&mut self, evaluator: Evaluator<R>) -> &mut Self {
        if evaluator.is_set() {
            self.evaluator = evaluator;
        } else {
            debug!(name = %self.name, "ignoring unset evaluator");
        }
        self
    }

    /// Evaluates the scalar function on `record`.
    ///
    /// # Errors
    /// `EvalError::VariantMismatch` if the expression is a vector,
    /// `EvalError::Unset` if it has no evaluator, or whatever the function
    /// itself reports.
    pub fn evaluate_scalar(&self, record: &R) -> EvalResult<Scalar> {
        match &self.evaluator {
            Evaluator::Scalar(f) => f(record),
            _ => Err(self.mismatch(Shape::Scalar)),
        }
    }

    /// Evaluates the vector function on `record`.
    ///
    /// # Errors
    /// `EvalError::VariantMismatch` if the expression is a scalar,
    /// `EvalError::Unset` if it has no evaluator, or whatever the function
    /// itself reports.
    pub fn evaluate_vector(&self, record: &R) -> EvalResult<Sequence> {
        match &self.evaluator {
            Evaluator::Vector(f) => f(record),
            _ => Err(self.mismatch(Shape::Vector)),
        }
    }

    /// Evaluates whichever variant is populated.
    ///
    /// # Errors
    /// `EvalError::Unset` if the expression has no evaluator, or whatever the
    /// function itself reports.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::{NamedExpr, value::ExprValue};
    ///
    /// let hits = NamedExpr::from_vector("hits", |r: &Vec<f64>| r.clone());
    /// assert_eq!(hits.evaluate(&vec![1.0, 2.0]).unwrap(),
    ///            ExprValue::Sequence(vec![1.0, 2.0]));
    /// ```
    pub fn evaluate(&self, record: &R) -> EvalResult<ExprValue> {
        match &self.evaluator {
            Evaluator::Scalar(f) => f(record).map(ExprValue::Scalar),
            Evaluator::Vector(f) => f(record).map(ExprValue::Sequence),
            Evaluator::Unset => Err(EvalError::Unset { name: self.name.clone() }),
        }
    }

    /// Replaces the evaluator without the `Unset` no-op rule.
    pub(crate) fn replace_evaluator(&mut self, evaluator: Evaluator<R>) {
        self.evaluator = evaluator;
    }

    /// Replaces the name with a derived one.
    pub(crate) fn replace_name(&mut self, name: &str) {
        self.name = clean_name(name);
    }

    fn mismatch(&self, expected: Shape) -> EvalError {
        match self.shape() {
            Shape::Unset => EvalError::Unset { name: self.name.clone() },
            found => EvalError::VariantMismatch { name: self.name.clone(),
                                                  expected,
                                                  found },
        }
    }
}

impl<R: 'static> NamedExpr<R> {
    /// Creates a scalar leaf from an infallible function of the record.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::NamedExpr;
    ///
    /// let x = NamedExpr::from_scalar("x", |r: &(f64, f64)| r.0);
    /// assert!(x.is_scalar());
    /// assert_eq!(x.evaluate_scalar(&(4.0, 5.0)).unwrap(), 4.0);
    /// ```
    pub fn from_scalar<F>(name: impl AsRef<str>, f: F) -> Self
        where F: Fn(&R) -> Scalar + Send + Sync + 'static
    {
        Self::from_evaluator(name, Evaluator::scalar(move |r| Ok(f(r))))
    }

    /// Creates a vector leaf from an infallible function of the record.
    pub fn from_vector<F>(name: impl AsRef<str>, f: F) -> Self
        where F: Fn(&R) -> Sequence + Send + Sync + 'static
    {
        Self::from_evaluator(name, Evaluator::vector(move |r| Ok(f(r))))
    }

    /// Creates a scalar leaf returning `value` for every record.
    ///
    /// The name is the canonical decimal text of `value`.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::NamedExpr;
    ///
    /// let c = NamedExpr::<()>::constant(3.5);
    /// assert_eq!(c.name(), "3.5");
    /// assert_eq!(c.evaluate_scalar(&()).unwrap(), 3.5);
    /// ```
    #[must_use]
    pub fn constant(value: Scalar) -> Self {
        Self::from_evaluator(constant_name(value), Evaluator::scalar(move |_| Ok(value)))
    }

    /// Installs a scalar function, clearing any vector function.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::NamedExpr;
    ///
    /// let mut x = NamedExpr::from_vector("x", |_: &()| vec![1.0]);
    /// x.set_scalar(|_| 2.0);
    /// assert!(x.is_scalar());
    /// assert!(!x.is_vector());
    /// ```
    pub fn set_scalar<F>(&mut self, f: F) -> &mut Self
        where F: Fn(&R) -> Scalar + Send + Sync + 'static
    {
        self.evaluator = Evaluator::scalar(move |r| Ok(f(r)));
        self
    }

    /// Installs a vector function, clearing any scalar function.
    pub fn set_vector<F>(&mut self, f: F) -> &mut Self
        where F: Fn(&R) -> Sequence + Send + Sync + 'static
    {
        self.evaluator = Evaluator::vector(move |r| Ok(f(r)));
        self
    }
}
