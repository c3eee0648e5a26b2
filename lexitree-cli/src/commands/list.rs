//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use lexitree_core::domain::language::{get_language_config, list_available_languages};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        match self {
            ListCommands::Languages => list_available_languages()
                .into_iter()
                .map(|code| -> Result<String> {
                    let config = get_language_config(code)?;
                    Ok(format!("{code}\t{}", config.metadata.name))
                })
                .collect(),
            ListCommands::Formats => Ok(OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| match value.get_help() {
                    Some(help) => format!("{}\t{help}", value.get_name()),
                    None => value.get_name().to_string(),
                })
                .collect()),
        }
    }
}
