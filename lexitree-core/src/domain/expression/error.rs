//! Evaluation errors

use thiserror::Error;

/// Why an arithmetic expression could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    Empty,

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("division by zero")]
    DivisionByZero,

    /// An operator found fewer than two operands on the stack
    #[error("operator '{operator}' is missing an operand")]
    InsufficientOperands { operator: char },

    /// Evaluation finished with more or less than one value
    #[error("expression left {remaining} values on the stack")]
    UnbalancedStack { remaining: usize },

    /// Syntactically accepted but has no arithmetic meaning (`==`, `&`)
    #[error("unsupported operator: {0:?}")]
    UnsupportedOperator(String),

    #[error("invalid number literal: {0:?}")]
    InvalidNumber(String),
}

impl EvalError {
    /// Arithmetic failures, as opposed to malformed input
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, EvalError::DivisionByZero)
    }
}

/// A malformed expression, wrapping the underlying cause
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid expression {expression:?}: {cause}")]
pub struct ExpressionError {
    /// The text that was evaluated
    pub expression: String,
    #[source]
    pub cause: EvalError,
}

impl ExpressionError {
    pub fn new(expression: impl Into<String>, cause: EvalError) -> Self {
        Self {
            expression: expression.into(),
            cause,
        }
    }

    pub fn cause(&self) -> &EvalError {
        &self.cause
    }
}
