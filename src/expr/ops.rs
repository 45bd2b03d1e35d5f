use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use tracing::trace;

use crate::{
    combinator::{apply_binary, apply_unary},
    expr::{
        core::NamedExpr,
        naming::{binary_name, unary_name},
    },
    operator::{BinaryOperator, UnaryOperator},
};

impl<R: 'static> NamedExpr<R> {
    /// Combines `self` and `rhs` with a binary operator into a new expression.
    ///
    /// Neither operand is modified. The result is named `(self)op(rhs)` and
    /// its evaluator follows the broadcast, truncation and short-circuit rules
    /// of the combinator library.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::{NamedExpr, operator::BinaryOperator};
    ///
    /// let f = NamedExpr::<()>::constant(3.5);
    /// let sum = f.binary(BinaryOperator::Add, &f);
    ///
    /// assert_eq!(sum.name(), "(3.5)+(3.5)");
    /// assert_eq!(sum.evaluate_scalar(&()).unwrap(), 7.0);
    /// ```
    #[must_use]
    pub fn binary(&self, op: BinaryOperator, rhs: &Self) -> Self {
        let mut out = self.clone();
        out.binary_assign(op, rhs);
        out
    }

    /// Replaces `self` with `(self)op(rhs)` in place.
    pub fn binary_assign(&mut self, op: BinaryOperator, rhs: &Self) {
        let name = binary_name(self.name(), op, rhs.name());
        let evaluator = apply_binary(op, self.evaluator(), rhs.evaluator());
        trace!(%name, shape = %evaluator.shape(), "composed binary expression");
        self.replace_name(&name);
        self.replace_evaluator(evaluator);
    }

    /// Applies a unary operator, giving a new expression named `op(self)`.
    #[must_use]
    pub fn unary(&self, op: UnaryOperator) -> Self {
        let name = unary_name(op, self.name());
        let evaluator = apply_unary(op, self.evaluator());
        trace!(%name, shape = %evaluator.shape(), "composed unary expression");
        Self::from_evaluator(name, evaluator)
    }

    /// Unary plus: renames to `+(self)` and keeps the evaluator.
    #[must_use]
    pub fn positive(&self) -> Self {
        let mut out = self.clone();
        out.replace_name(&unary_name('+', self.name()));
        out
    }

    /// `(self)==(rhs)`
    #[must_use]
    pub fn equal(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::Equal, rhs)
    }

    /// `(self)!=(rhs)`
    #[must_use]
    pub fn not_equal(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::NotEqual, rhs)
    }

    /// `(self)<(rhs)`
    #[must_use]
    pub fn less(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::Less, rhs)
    }

    /// `(self)>(rhs)`
    #[must_use]
    pub fn greater(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::Greater, rhs)
    }

    /// `(self)<=(rhs)`
    #[must_use]
    pub fn less_equal(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::LessEqual, rhs)
    }

    /// `(self)>=(rhs)`
    #[must_use]
    pub fn greater_equal(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::GreaterEqual, rhs)
    }

    /// Short-circuit `(self)&&(rhs)`.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::NamedExpr;
    ///
    /// let jets = NamedExpr::from_vector("jets", |_: &()| vec![1.0, 1.0, 1.0]);
    /// let both = NamedExpr::constant(0.0).and(&jets);
    ///
    /// assert_eq!(both.name(), "(0)&&(jets)");
    /// assert_eq!(both.evaluate_vector(&()).unwrap(), vec![0.0, 0.0, 0.0]);
    /// ```
    #[must_use]
    pub fn and(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::And, rhs)
    }

    /// Short-circuit `(self)||(rhs)`.
    #[must_use]
    pub fn or(&self, rhs: &Self) -> Self {
        self.binary(BinaryOperator::Or, rhs)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl<R: 'static> $assign_trait<&NamedExpr<R>> for NamedExpr<R> {
            fn $assign_method(&mut self, rhs: &NamedExpr<R>) {
                self.binary_assign($op, rhs);
            }
        }

        impl<R: 'static> $assign_trait for NamedExpr<R> {
            fn $assign_method(&mut self, rhs: NamedExpr<R>) {
                self.binary_assign($op, &rhs);
            }
        }

        impl<R: 'static> $trait for NamedExpr<R> {
            type Output = NamedExpr<R>;

            fn $method(mut self, rhs: NamedExpr<R>) -> NamedExpr<R> {
                self.binary_assign($op, &rhs);
                self
            }
        }

        impl<R: 'static> $trait<&NamedExpr<R>> for NamedExpr<R> {
            type Output = NamedExpr<R>;

            fn $method(mut self, rhs: &NamedExpr<R>) -> NamedExpr<R> {
                self.binary_assign($op, rhs);
                self
            }
        }

        impl<R: 'static> $trait for &NamedExpr<R> {
            type Output = NamedExpr<R>;

            fn $method(self, rhs: Self) -> NamedExpr<R> {
                self.binary($op, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, AddAssign, add_assign, BinaryOperator::Add);
impl_binary_operator!(Sub, sub, SubAssign, sub_assign, BinaryOperator::Sub);
impl_binary_operator!(Mul, mul, MulAssign, mul_assign, BinaryOperator::Mul);
impl_binary_operator!(Div, div, DivAssign, div_assign, BinaryOperator::Div);
impl_binary_operator!(Rem, rem, RemAssign, rem_assign, BinaryOperator::Mod);

impl<R: 'static> Neg for NamedExpr<R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.unary(UnaryOperator::Negate)
    }
}

impl<R: 'static> Neg for &NamedExpr<R> {
    type Output = NamedExpr<R>;

    fn neg(self) -> NamedExpr<R> {
        self.unary(UnaryOperator::Negate)
    }
}

impl<R: 'static> Not for NamedExpr<R> {
    type Output = Self;

    fn not(self) -> Self {
        self.unary(UnaryOperator::Not)
    }
}

impl<R: 'static> Not for &NamedExpr<R> {
    type Output = NamedExpr<R>;

    fn not(self) -> NamedExpr<R> {
        self.unary(UnaryOperator::Not)
    }
}
