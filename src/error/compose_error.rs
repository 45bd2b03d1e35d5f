use thiserror::Error;

/// Represents all errors that can occur while composing named expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// The indexing operator was applied to a scalar expression.
    #[error("cannot apply indexing operator to scalar expression '{name}'")]
    IndexOnScalar {
        /// The name of the scalar receiver.
        name: String,
    },
    /// A vector expression was used as an index.
    #[error("cannot use vector expression '{name}' as index")]
    VectorIndexOperand {
        /// The name of the offending index operand.
        name: String,
    },
    /// An operand required by the operator carries no evaluator.
    #[error("expression '{name}' has no evaluator")]
    UnsetOperand {
        /// The name of the unset operand.
        name: String,
    },
}
