use crate::application::diagnostics::Diagnostics;
use crate::application::error::ParseError;
use crate::application::pipeline::{Next, Stage};
use crate::domain::model::{Lexeme, Node};

/// Wraps a single whitespace-free token in a lexeme whose children come
/// from the inner stages
#[derive(Debug, Default)]
pub struct LexemeStage;

impl LexemeStage {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for LexemeStage {
    fn name(&self) -> &'static str {
        "lexeme"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return next.parse(text, diagnostics);
        }

        let lexeme = match next.parse(text, diagnostics)? {
            // Decorated words and symbol runs come back as lexemes already
            Some(Node::Lexeme(inner)) => Lexeme::with_children(text, inner.into_children()),
            Some(node) => Lexeme::wrap(text, node),
            None => return Ok(None),
        };
        Ok(Some(Node::Lexeme(lexeme)))
    }
}
