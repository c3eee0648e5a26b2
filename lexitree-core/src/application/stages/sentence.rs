use crate::application::diagnostics::{Diagnostics, GapReason};
use crate::application::error::ParseError;
use crate::application::pipeline::{Next, Stage};
use crate::domain::language::Grammar;
use crate::domain::model::{Lexeme, Node, Sentence, Symbol};
use std::sync::Arc;

/// Recognises a capitalised, terminated sentence and splits its body on
/// whitespace. The terminator is kept as a trailing symbol.
#[derive(Debug)]
pub struct SentenceStage {
    grammar: Arc<Grammar>,
}

impl SentenceStage {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self { grammar }
    }
}

impl Stage for SentenceStage {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        let text = text.trim();
        if !self.grammar.starts_sentence(text) {
            return next.parse(text, diagnostics);
        }
        let Some((body, terminator)) = self.grammar.split_terminator(text) else {
            return next.parse(text, diagnostics);
        };

        let mut sentence = Sentence::new();
        for token in body.split_whitespace() {
            match next.parse(token, diagnostics)? {
                Some(Node::Lexeme(lexeme)) => sentence.push(lexeme),
                Some(other) => sentence.push(Lexeme::wrap(token, other)),
                None => diagnostics.record(self.name(), token, GapReason::Unrecognized),
            }
        }
        sentence.push(Symbol::new(terminator, &self.grammar)?);

        Ok(Some(Node::Sentence(sentence)))
    }
}

#[cfg(test)]
mod tests {
    use crate::application::stages::test_support::run_from;
    use crate::application::GapReason;
    use crate::domain::model::NodeKind;

    #[test]
    fn test_terminator_is_a_trailing_symbol() {
        let (node, diagnostics) = run_from("sentence", "The quick fox jumps.");
        let node = node.unwrap();
        let sentence = node.as_sentence().unwrap();
        assert_eq!(sentence.lexemes().count(), 4);
        assert_eq!(sentence.terminator().map(|t| t.text()), Some("."));
        assert_eq!(sentence.word_count(), 4);
        assert_eq!(node.text(), "The quick fox jumps.");
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_ellipsis_terminator_is_atomic() {
        let (node, _) = run_from("sentence", "And then...");
        let node = node.unwrap();
        let terminator = node.as_sentence().unwrap().terminator().unwrap();
        assert!(terminator.is_ellipsis());
        assert_eq!(node.text(), "And then...");
    }

    #[test]
    fn test_expression_is_substituted() {
        let (node, _) = run_from("sentence", "It costs 2+3*4 coins.");
        let node = node.unwrap();
        assert_eq!(node.text(), "It costs 14 coins.");
        assert_eq!(node.word_count(), 3);
    }

    #[test]
    fn test_lowercase_or_unterminated_is_forwarded() {
        let (node, _) = run_from("sentence", "lowercase.");
        assert_eq!(node.unwrap().kind(), NodeKind::Lexeme);

        let (node, _) = run_from("sentence", "Unterminated");
        assert_eq!(node.unwrap().kind(), NodeKind::Lexeme);
    }

    #[test]
    fn test_unrecognised_token_is_recorded() {
        let (node, diagnostics) = run_from("sentence", "Price is § today.");
        let node = node.unwrap();
        assert_eq!(node.text(), "Price is today.");
        assert_eq!(diagnostics.gap_count(), 1);
        assert_eq!(diagnostics.gaps()[0].text, "§");
        assert_eq!(diagnostics.gaps()[0].stage, "sentence");
        assert_eq!(diagnostics.gaps()[0].reason, GapReason::Unrecognized);
    }
}
