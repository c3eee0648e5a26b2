use crate::application::diagnostics::Diagnostics;
use crate::application::error::ParseError;
use crate::application::pipeline::{Next, Stage};
use crate::domain::language::Grammar;
use crate::domain::model::{Expression, Node};
use std::sync::Arc;

/// Replaces an arithmetic token with its value. Tokens that fail the
/// syntactic check or evaluation are forwarded untouched.
#[derive(Debug)]
pub struct ExpressionStage {
    grammar: Arc<Grammar>,
}

impl ExpressionStage {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self { grammar }
    }
}

impl Stage for ExpressionStage {
    fn name(&self) -> &'static str {
        "expression"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        let evaluator = self.grammar.evaluator();
        if !evaluator.is_valid(text) {
            return next.parse(text, diagnostics);
        }

        match evaluator.evaluate(text) {
            Ok(value) => Ok(Some(Node::Expression(Expression::new(text, value)))),
            Err(error) => {
                log::debug!("{error}; forwarding");
                next.parse(text, diagnostics)
            }
        }
    }
}
