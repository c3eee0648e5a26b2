use crate::application::diagnostics::{Diagnostics, GapReason};
use crate::application::error::ParseError;
use crate::application::execution::Executor;
use crate::application::pipeline::{Next, Stage};
use crate::domain::language::Grammar;
use crate::domain::model::{Document, Node};
use std::sync::Arc;

/// Splits text on blank lines and keeps every candidate that parses as a
/// paragraph. Always produces a document.
#[derive(Debug)]
pub struct DocumentStage {
    grammar: Arc<Grammar>,
    executor: Executor,
}

impl DocumentStage {
    pub fn new(grammar: Arc<Grammar>, executor: Executor) -> Self {
        Self { grammar, executor }
    }
}

impl Stage for DocumentStage {
    fn name(&self) -> &'static str {
        "document"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        let candidates = self.grammar.split_paragraphs(text);
        log::debug!("{} paragraph candidates", candidates.len());

        // Each candidate collects its own gaps; they are merged in input order.
        let results = self.executor.map(&candidates, |candidate| {
            let mut local = Diagnostics::new();
            next.parse(candidate, &mut local)
                .map(|node| (node, local))
        });

        let mut document = Document::new();
        for (candidate, result) in candidates.iter().zip(results) {
            let (node, local) = result?;
            // Spans already recorded further down are not counted again
            let recorded_below = !local.is_clean();
            diagnostics.extend(local);
            match node {
                Some(Node::Paragraph(paragraph)) => document.push(paragraph),
                Some(other) => diagnostics.record(
                    self.name(),
                    *candidate,
                    GapReason::UnexpectedKind(other.kind()),
                ),
                None if recorded_below => {
                    log::debug!("paragraph candidate {candidate:?} left no sentences")
                }
                None => diagnostics.record(self.name(), *candidate, GapReason::Unrecognized),
            }
        }

        Ok(Some(Node::Document(document)))
    }
}

#[cfg(test)]
mod tests {
    use crate::application::stages::test_support::run_from;
    use crate::application::GapReason;
    use crate::domain::model::NodeKind;

    #[test]
    fn test_splits_on_blank_lines() {
        let (node, diagnostics) = run_from("document", "\tOne two.\n\n\tThree four!\n\n\n");
        let document = node.unwrap();
        assert_eq!(document.paragraph_count(), 2);
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_empty_input_gives_empty_document() {
        let (node, diagnostics) = run_from("document", "  \n\n \t\n");
        let document = node.unwrap();
        assert_eq!(document.kind(), NodeKind::Document);
        assert!(document.children().is_empty());
        assert!(diagnostics.is_clean());
    }

    #[test]
    fn test_unindented_candidate_is_a_gap() {
        let (node, diagnostics) = run_from("document", "\tKept here.\n\nNot indented.");
        assert_eq!(node.unwrap().paragraph_count(), 1);
        assert_eq!(diagnostics.gap_count(), 1);
        let gap = &diagnostics.gaps()[0];
        assert_eq!(gap.stage, "document");
        assert_eq!(gap.text, "Not indented.");
        assert_eq!(gap.reason, GapReason::UnexpectedKind(NodeKind::Sentence));
    }

    #[test]
    fn test_failed_paragraph_is_recorded_once() {
        for text in ["\t@@ ##", "\tlowercase only.", "\t..."] {
            let (node, diagnostics) = run_from("document", text);
            assert_eq!(node.unwrap().paragraph_count(), 0);
            assert_eq!(diagnostics.gap_count(), 1, "{text:?}");
            assert_eq!(diagnostics.gaps()[0].stage, "paragraph");
        }
    }

    #[test]
    fn test_unparseable_candidate_is_unrecognized() {
        let (node, diagnostics) = run_from("document", "\tKept.\n\n@@ ##");
        assert_eq!(node.unwrap().paragraph_count(), 1);
        assert_eq!(diagnostics.gaps()[0].reason, GapReason::Unrecognized);
    }
}
