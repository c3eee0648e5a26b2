//! Arithmetic expression evaluator
//!
//! Evaluation runs in three steps:
//!
//! 1. [`Tokenizer`] scans numbers, operator runs and parentheses, counting
//!    anything it has to skip.
//! 2. [`to_postfix`] applies the shunting-yard algorithm (`+ -` bind looser
//!    than `* /`, all left-associative).
//! 3. [`evaluate_postfix`] folds the postfix sequence on a value stack.
//!
//! [`is_valid_expression`] is the cheaper syntactic check the pipeline runs
//! before attempting evaluation.

mod error;
mod postfix;
mod tokenizer;

pub use error::{EvalError, ExpressionError};
pub use postfix::{evaluate_postfix, to_postfix, Operator, PostfixToken};
pub use tokenizer::{Token, TokenStream, Tokenizer};

use crate::domain::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

/// Operator characters recognised when no language config is involved
pub const DEFAULT_OPERATORS: &[char] = &['+', '-', '*', '/'];

static DEFAULT_EVALUATOR: OnceLock<Evaluator> = OnceLock::new();

/// Tokenizer plus syntactic pre-check for one operator alphabet
#[derive(Debug, Clone)]
pub struct Evaluator {
    tokenizer: Tokenizer,
    validity: Regex,
}

impl Evaluator {
    /// Evaluator over `+ - * /`
    pub fn new() -> Self {
        Self::with_operators(DEFAULT_OPERATORS).expect("default operator patterns are valid")
    }

    /// Evaluator accepting the given operator characters syntactically.
    /// Only `+ - * /` evaluate; other runs fail with
    /// [`EvalError::UnsupportedOperator`].
    pub fn with_operators(operators: &[char]) -> Result<Self, ConfigError> {
        if operators.is_empty() {
            return Err(ConfigError::Invalid(
                "expression operators must not be empty".to_string(),
            ));
        }
        let class: String = operators
            .iter()
            .map(|op| regex::escape(&op.to_string()))
            .collect();

        let tokenizer = Tokenizer::new(&class)?;
        let number = r"\d+(?:\.\d+)?";
        let validity = Regex::new(&format!(
            r"^\s*{number}\s*(?:[{class}]+\s*{number}\s*)*$"
        ))
        .map_err(|source| ConfigError::Pattern {
            what: "expression",
            source,
        })?;

        Ok(Self {
            tokenizer,
            validity,
        })
    }

    /// `NUMBER (OPERATOR NUMBER)*` with optional whitespace. Parentheses
    /// are not part of this grammar.
    pub fn is_valid(&self, text: &str) -> bool {
        self.validity.is_match(text)
    }

    pub fn tokenize(&self, text: &str) -> Result<TokenStream, EvalError> {
        self.tokenizer.tokenize(text)
    }

    /// Evaluate `text`, wrapping any failure with the offending input
    pub fn evaluate(&self, text: &str) -> Result<f64, ExpressionError> {
        self.evaluate_inner(text)
            .map_err(|cause| ExpressionError::new(text, cause))
    }

    fn evaluate_inner(&self, text: &str) -> Result<f64, EvalError> {
        let stream = self.tokenize(text)?;
        if stream.dropped > 0 {
            log::debug!(
                "skipped {} unrecognised characters in expression {:?}",
                stream.dropped,
                text
            );
        }
        if stream.tokens.is_empty() {
            return Err(EvalError::Empty);
        }

        let postfix = to_postfix(&stream.tokens)?;
        evaluate_postfix(&postfix)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_evaluator() -> &'static Evaluator {
    DEFAULT_EVALUATOR.get_or_init(Evaluator::new)
}

/// Evaluate an arithmetic expression over `+ - * /` and parentheses
///
/// # Example
///
/// ```
/// use lexitree_core::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<f64, ExpressionError> {
    default_evaluator().evaluate(text)
}

/// Syntactic pre-check: `NUMBER (OPERATOR NUMBER)*`
pub fn is_valid_expression(text: &str) -> bool {
    default_evaluator().is_valid(text)
}
