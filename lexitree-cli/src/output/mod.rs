//! Output formatting module

use anyhow::{Context, Result};
use lexitree_core::operations::AnalysisReport;
use lexitree_core::ParseOutput;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one parsed input
    fn format_document(&mut self, source: &str, output: &ParseOutput) -> Result<()>;

    /// Format the analysis report of one input
    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;
pub mod tree;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
pub use tree::TreeFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Normalized text, or a plain-text report
    Text,
    /// JSON array with one entry per input
    Json,
    /// Markdown sentence list or report
    Markdown,
    /// Indented node tree (parse only)
    Tree,
}

/// Sink for formatted output
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Open `path` for writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format` writing into `writer`
pub fn create_formatter(format: OutputFormat, writer: OutputWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Tree => Box::new(TreeFormatter::new(writer)),
    }
}

/// `1 sentence`, `2 sentences`
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
