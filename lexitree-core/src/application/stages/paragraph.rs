use crate::application::diagnostics::{Diagnostics, GapReason};
use crate::application::error::ParseError;
use crate::application::pipeline::{Next, Stage};
use crate::domain::language::Grammar;
use crate::domain::model::{Node, Paragraph};
use std::sync::Arc;

/// Recognises an indented block and splits it into sentence candidates
#[derive(Debug)]
pub struct ParagraphStage {
    grammar: Arc<Grammar>,
}

impl ParagraphStage {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self { grammar }
    }
}

impl Stage for ParagraphStage {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        let body = match self.grammar.strip_indent(text) {
            Some(body) => body,
            None if self.grammar.require_indent() => return next.parse(text, diagnostics),
            None => text.trim(),
        };

        let mut paragraph = Paragraph::new();
        for candidate in self.grammar.split_sentences(body) {
            match next.parse(candidate, diagnostics)? {
                Some(Node::Sentence(sentence)) => paragraph.push(sentence),
                Some(other) => diagnostics.record(
                    self.name(),
                    candidate,
                    GapReason::UnexpectedKind(other.kind()),
                ),
                None => diagnostics.record(self.name(), candidate, GapReason::Unrecognized),
            }
        }

        if paragraph.is_empty() {
            log::debug!("no sentences in paragraph candidate {text:?}");
            return Ok(None);
        }
        Ok(Some(Node::Paragraph(paragraph)))
    }
}

#[cfg(test)]
mod tests {
    use crate::application::stages::test_support::run_from;
    use crate::application::GapReason;
    use crate::domain::model::NodeKind;

    #[test]
    fn test_tab_and_space_indents() {
        for text in ["\tOne two. Three!", "    One two. Three!"] {
            let (node, diagnostics) = run_from("paragraph", text);
            let paragraph = node.unwrap();
            assert_eq!(paragraph.kind(), NodeKind::Paragraph);
            assert_eq!(paragraph.sentence_count(), 2);
            assert_eq!(paragraph.text(), "    One two. Three!");
            assert!(diagnostics.is_clean());
        }
    }

    #[test]
    fn test_ellipsis_ends_a_sentence() {
        let (node, _) = run_from("paragraph", "\tWait for it... Done.");
        let paragraph = node.unwrap();
        assert_eq!(paragraph.sentence_count(), 2);
        assert_eq!(paragraph.text(), "    Wait for it... Done.");
    }

    #[test]
    fn test_unindented_text_is_forwarded() {
        let (node, _) = run_from("paragraph", "No indent here.");
        assert_eq!(node.unwrap().kind(), NodeKind::Sentence);
    }

    #[test]
    fn test_bad_sentence_is_dropped_and_recorded() {
        let (node, diagnostics) = run_from("paragraph", "\tGood one. lowercase. Fine!");
        assert_eq!(node.unwrap().sentence_count(), 2);
        assert_eq!(diagnostics.gap_count(), 1);
        assert_eq!(diagnostics.gaps()[0].text, "lowercase.");
        assert_eq!(diagnostics.gaps()[0].stage, "paragraph");
        assert_eq!(
            diagnostics.gaps()[0].reason,
            GapReason::UnexpectedKind(NodeKind::Lexeme)
        );
    }

    #[test]
    fn test_multi_word_fragment_is_unrecognized() {
        let (node, diagnostics) = run_from("paragraph", "\tGood one. no capital here. Fine!");
        assert_eq!(node.unwrap().sentence_count(), 2);
        assert_eq!(diagnostics.gaps()[0].reason, GapReason::Unrecognized);
    }

    #[test]
    fn test_paragraph_without_sentences_is_unrecognized() {
        let (node, diagnostics) = run_from("paragraph", "\t@@ ##");
        assert!(node.is_none());
        assert_eq!(diagnostics.gaps()[0].reason, GapReason::Unrecognized);
    }
}
