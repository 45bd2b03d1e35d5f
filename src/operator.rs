use crate::value::core::{Scalar, from_bool, is_true};

/// Represents a binary operator that can combine two named expressions.
///
/// Every operator works on plain `f64` operands. Comparisons and logical
/// operators produce numeric booleans (`1.0` for true, `0.0` for false).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating remainder (`%`), sign follows the dividend.
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`), short-circuiting.
    And,
    /// Logical or (`||`), short-circuiting.
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl BinaryOperator {
    /// Applies the operator to two scalar operands.
    ///
    /// Logical operators are evaluated on already computed operands here; the
    /// short-circuit rules live in the combinator library, which decides
    /// whether the right operand is computed at all.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.apply(-7.0, 3.0), -1.0);
    /// assert_eq!(BinaryOperator::LessEqual.apply(2.0, 2.0), 1.0);
    /// assert_eq!(BinaryOperator::And.apply(2.0, 0.0), 0.0);
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, left: Scalar, right: Scalar) -> Scalar {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match self {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            Mod => left % right,
            Equal => from_bool(left == right),
            NotEqual => from_bool(left != right),
            Less => from_bool(left < right),
            Greater => from_bool(left > right),
            LessEqual => from_bool(left <= right),
            GreaterEqual => from_bool(left >= right),
            And => from_bool(is_true(left) && is_true(right)),
            Or => from_bool(is_true(left) || is_true(right)),
        }
    }
}

impl UnaryOperator {
    /// Applies the operator to a scalar operand.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::operator::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Negate.apply(2.5), -2.5);
    /// assert_eq!(UnaryOperator::Not.apply(0.0), 1.0);
    /// assert_eq!(UnaryOperator::Not.apply(f64::NAN), 0.0);
    /// ```
    #[must_use]
    pub fn apply(self, value: Scalar) -> Scalar {
        match self {
            Self::Negate => -value,
            Self::Not => from_bool(!is_true(value)),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
