use tracing::trace;

use crate::expr::NamedExpr;

/// Turns expression text into a named expression.
///
/// The grammar, precedence and token set belong entirely to the
/// implementation. A returned expression must have a whitespace-free name and
/// exactly one evaluator variant, matching whether the text denotes a scalar
/// or a vector quantity.
pub trait ExpressionParser<R> {
    /// The error reported for text the parser rejects.
    type Error: std::error::Error;

    /// Parses `text`.
    ///
    /// # Errors
    /// `Self::Error` if `text` is not a valid expression.
    fn parse(&self, text: &str) -> Result<NamedExpr<R>, Self::Error>;
}

impl<R, E, F> ExpressionParser<R> for F
    where F: Fn(&str) -> Result<NamedExpr<R>, E>,
          E: std::error::Error
{
    type Error = E;

    fn parse(&self, text: &str) -> Result<NamedExpr<R>, E> {
        self(text)
    }
}

impl<R> NamedExpr<R> {
    /// Builds an expression from text with `parser`, adopting its name and
    /// evaluator as returned.
    ///
    /// # Errors
    /// Whatever `parser` reports for `text`.
    ///
    /// # Example
    /// ```
    /// use lazyexpr::{NamedExpr, error::ComposeError, parser::ExpressionParser};
    ///
    /// struct Variables;
    ///
    /// impl ExpressionParser<f64> for Variables {
    ///     type Error = ComposeError;
    ///
    ///     fn parse(&self, text: &str) -> Result<NamedExpr<f64>, ComposeError> {
    ///         match text.trim() {
    ///             "x" => Ok(NamedExpr::from_scalar("x", |r: &f64| *r)),
    ///             other => Err(ComposeError::UnsetOperand { name: other.to_string() }),
    ///         }
    ///     }
    /// }
    ///
    /// let parser = Variables;
    /// let x = NamedExpr::from_text(&parser, " x ").unwrap();
    /// assert_eq!(x.evaluate_scalar(&2.0).unwrap(), 2.0);
    /// assert!(NamedExpr::from_text(&parser, "y").is_err());
    /// ```
    pub fn from_text<P>(parser: &P, text: &str) -> Result<Self, P::Error>
        where P: ExpressionParser<R> + ?Sized
    {
        let expr = parser.parse(text)?;
        trace!(text, name = expr.name(), shape = %expr.shape(), "parsed expression");
        Ok(expr)
    }
}
