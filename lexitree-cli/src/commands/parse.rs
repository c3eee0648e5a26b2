//! Parse command implementation

use super::InputArgs;
use crate::output::{create_formatter, open_output, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fail when any part of the input could not be parsed
    #[arg(long)]
    pub strict: bool,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting text parsing");

        let parser = self.inputs.build_parser()?;
        let mut formatter = create_formatter(self.format, open_output(self.output.as_deref())?);
        let mut total_gaps = 0;

        self.inputs.for_each_input(quiet, |source, text| {
            let output = parser.parse_with_diagnostics(text)?;
            let gaps = output.diagnostics.gap_count();
            if gaps > 0 {
                log::warn!("{source}: {gaps} span(s) could not be parsed");
            }
            total_gaps += gaps;
            formatter.format_document(&source.to_string(), &output)
        })?;
        formatter.finish()?;

        if self.strict && total_gaps > 0 {
            bail!("{total_gaps} span(s) could not be parsed");
        }
        Ok(())
    }
}
