/// A single numeric result.
pub type Scalar = f64;

/// An ordered list of numeric results whose length is decided per record.
pub type Sequence = Vec<Scalar>;

/// Returns the truthiness of a numeric value.
///
/// A value is true iff it is not equal to zero, so `NaN` counts as true.
///
/// # Example
/// ```
/// use lazyexpr::value::core::is_true;
///
/// assert!(is_true(-0.5));
/// assert!(is_true(f64::NAN));
/// assert!(!is_true(0.0));
/// assert!(!is_true(-0.0));
/// ```
#[must_use]
pub fn is_true(value: Scalar) -> bool {
    value != 0.0
}

/// Converts a boolean into its numeric form (`1.0` or `0.0`).
#[must_use]
pub const fn from_bool(value: bool) -> Scalar {
    if value { 1.0 } else { 0.0 }
}

/// Describes which evaluator variant a named expression carries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No evaluator has been installed.
    Unset,
    /// The expression yields one number per record.
    Scalar,
    /// The expression yields a sequence of numbers per record.
    Vector,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Scalar => write!(f, "scalar"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

/// The result of evaluating a named expression against one record.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprValue {
    /// A single number.
    Scalar(Scalar),
    /// A sequence of numbers, possibly empty.
    Sequence(Sequence),
}

impl From<Scalar> for ExprValue {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

impl From<Sequence> for ExprValue {
    fn from(v: Sequence) -> Self {
        Self::Sequence(v)
    }
}

impl ExprValue {
    /// Returns the shape of this value.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Sequence(_) => Shape::Vector,
        }
    }

    /// Returns the scalar, or `None` for a sequence.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the sequence elements, or `None` for a scalar.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Scalar]> {
        match self {
            Self::Sequence(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }

    /// Returns whether the value passes: a true scalar, or a sequence with at
    /// least one true element.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::value::ExprValue;
    ///
    /// assert!(ExprValue::Scalar(2.0).passes());
    /// assert!(ExprValue::Sequence(vec![0.0, 1.0]).passes());
    /// assert!(!ExprValue::Sequence(vec![]).passes());
    /// ```
    #[must_use]
    pub fn passes(&self) -> bool {
        match self {
            Self::Scalar(v) => is_true(*v),
            Self::Sequence(v) => crate::aggregate::any_true(v),
        }
    }
}

impl std::fmt::Display for ExprValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Sequence(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            },
        }
    }
}
