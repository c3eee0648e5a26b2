//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use lexitree_core::{Grammar, LanguageConfig};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match self.load() {
            Ok((config, grammar)) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", grammar.code());
                println!("  Language name: {}", grammar.name());
                let scripts: Vec<&str> = config.scripts.iter().map(|s| s.name.as_str()).collect();
                println!("  Scripts: {}", scripts.join(", "));
                let terminators: String = config.sentence.terminators.iter().collect();
                println!("  Terminators: {terminators}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }

    /// Parse the file and compile it the way a parser would
    fn load(&self) -> Result<(LanguageConfig, Grammar)> {
        let config = LanguageConfig::from_path(&self.language_config)?;
        let grammar = Grammar::from_config(&config).context("rules do not compile")?;
        Ok((config, grammar))
    }
}
