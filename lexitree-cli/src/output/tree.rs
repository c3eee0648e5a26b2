//! Indented node tree output

use super::{plural, OutputFormatter};
use anyhow::{bail, Result};
use lexitree_core::operations::AnalysisReport;
use lexitree_core::{Node, ParseOutput};
use std::io::Write;

const INDENT: &str = "  ";

/// Tree formatter - one line per node, children indented under parents
pub struct TreeFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TreeFormatter<W> {
    /// Create a new tree formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_node(&mut self, node: &Node, depth: usize) -> Result<()> {
        let indent = INDENT.repeat(depth);
        match node {
            Node::Document(document) => {
                writeln!(self.writer, "{indent}document ({})", plural(document.len(), "paragraph"))?
            }
            Node::Paragraph(paragraph) => {
                writeln!(self.writer, "{indent}paragraph ({})", plural(paragraph.len(), "sentence"))?
            }
            Node::Sentence(sentence) => {
                writeln!(self.writer, "{indent}sentence {:?}", sentence.text())?
            }
            Node::Lexeme(lexeme) => writeln!(self.writer, "{indent}lexeme {:?}", lexeme.source())?,
            Node::Word(word) => writeln!(self.writer, "{indent}word {:?}", word.text())?,
            Node::Symbol(symbol) => writeln!(self.writer, "{indent}symbol {:?}", symbol.text())?,
            Node::Expression(expression) => writeln!(
                self.writer,
                "{indent}expression {:?} = {}",
                expression.source(),
                expression.rendered()
            )?,
        }
        for child in node.children() {
            self.write_node(child, depth + 1)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TreeFormatter<W> {
    fn format_document(&mut self, source: &str, output: &ParseOutput) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        self.write_node(&Node::Document(output.document.clone()), 0)?;
        for gap in output.diagnostics.gaps() {
            writeln!(self.writer, "! {gap}")?;
        }
        Ok(())
    }

    fn format_report(&mut self, _source: &str, _report: &AnalysisReport) -> Result<()> {
        bail!("Tree output is only available for the parse command")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use lexitree_core::operations::analyze;
    use lexitree_core::TextParser;

    #[test]
    fn test_tree_shape() {
        let parser = TextParser::new();
        let output = parser.parse_with_diagnostics("\tIt is 2+3 now, (ok).").unwrap();

        let buffer = SharedBuffer::default();
        let mut formatter = TreeFormatter::new(buffer.clone());
        formatter.format_document("input", &output).unwrap();
        formatter.finish().unwrap();

        let out = buffer.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "# input");
        assert_eq!(lines[1], "document (1 paragraph)");
        assert_eq!(lines[2], "  paragraph (1 sentence)");
        assert_eq!(lines[3], "    sentence \"It is 5 now, (ok).\"");
        assert!(out.contains("      lexeme \"It\"\n        word \"It\""));
        assert!(out.contains(
            "      lexeme \"2+3\"\n        expression \"2+3\" = 5\n      lexeme \"now,\"\n        word \"now\"\n        symbol \",\""
        ));
        assert!(out.contains("        symbol \"(\"\n        word \"ok\"\n        symbol \")\""));
        assert!(out.ends_with("      symbol \".\"\n"));
    }

    #[test]
    fn test_gaps_listed_after_tree() {
        let parser = TextParser::new();
        let output = parser.parse_with_diagnostics("no indent here.").unwrap();

        let buffer = SharedBuffer::default();
        let mut formatter = TreeFormatter::new(buffer.clone());
        formatter.format_document("input", &output).unwrap();

        let out = buffer.contents();
        assert!(out.contains("document (0 paragraphs)"));
        assert!(out.contains("! document stage: unrecognized \"no indent here.\""));
    }

    #[test]
    fn test_reports_are_rejected() {
        let parser = TextParser::new();
        let document = parser.parse("\tHi.").unwrap();
        let report = analyze(&document, parser.grammar(), 1);

        let mut formatter = TreeFormatter::new(SharedBuffer::default());
        assert!(formatter.format_report("x", &report).is_err());
    }
}
