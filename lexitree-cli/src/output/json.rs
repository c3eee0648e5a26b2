//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexitree_core::operations::{AnalysisReport, DocumentStatistics};
use lexitree_core::{Diagnostics, ParseOutput};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one entry per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<serde_json::Value>,
}

/// Data structure for a parsed document
#[derive(Debug, Serialize)]
pub struct DocumentData<'a> {
    /// Input the document was read from
    pub source: &'a str,
    pub statistics: DocumentStatistics,
    /// Normalized document text
    pub text: String,
    /// Rendered sentences in document order
    pub sentences: Vec<String>,
    pub diagnostics: &'a Diagnostics,
}

/// Data structure for an analysis report
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    pub source: &'a str,
    pub report: &'a AnalysisReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &ParseOutput) -> Result<()> {
        let document = &output.document;
        let data = DocumentData {
            source,
            statistics: DocumentStatistics::of(document),
            text: document.text(),
            sentences: document.sentences().map(|sentence| sentence.text()).collect(),
            diagnostics: &output.diagnostics,
        };
        self.entries.push(serde_json::to_value(data)?);
        Ok(())
    }

    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()> {
        self.entries
            .push(serde_json::to_value(ReportData { source, report })?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
