//! Analyze command implementation

use super::InputArgs;
use crate::output::{create_formatter, open_output, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use lexitree_core::operations::analyze;
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Sentences with fewer words are removed in the filtered view
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    pub min_words: usize,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        if self.format == OutputFormat::Tree {
            bail!("Tree output is only available for the parse command");
        }
        log::info!("Starting analysis (min words: {})", self.min_words);

        let parser = self.inputs.build_parser()?;
        let mut formatter = create_formatter(self.format, open_output(self.output.as_deref())?);

        self.inputs.for_each_input(quiet, |source, text| {
            let document = parser.parse(text)?;
            let report = analyze(&document, parser.grammar(), self.min_words);
            formatter.format_report(&source.to_string(), &report)
        })?;
        formatter.finish()
    }
}
