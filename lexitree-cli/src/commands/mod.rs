//! CLI command implementations

use crate::error::CliError;
use crate::input::{resolve_inputs, InputSource};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lexitree_core::{Config, ExecutionMode, LanguageConfig, TextParser};
use std::path::PathBuf;

pub mod analyze;
pub mod eval;
pub mod generate_config;
pub mod list;
pub mod parse;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse text into a document tree
    Parse(parse::ParseArgs),

    /// Run every analysis over parsed text and write a report
    Analyze(analyze::AnalyzeArgs),

    /// Evaluate one arithmetic expression
    Eval(eval::EvalArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Parse(args) => args.execute(quiet),
            Commands::Analyze(args) => args.execute(quiet),
            Commands::Eval(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Supported built-in languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// English language rules
    #[default]
    English,
    /// Russian language rules
    Russian,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

/// Input and parser options shared by the parse and analyze commands
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Built-in language rules
    #[arg(short, long, value_enum, conflicts_with = "language_config")]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Force parallel paragraph parsing even for small inputs
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Parse every paragraph on the calling thread
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for parallel parsing
    #[arg(short, long, value_name = "N", env = "LEXITREE_THREADS")]
    pub threads: Option<usize>,
}

impl InputArgs {
    /// Build a parser from the language and execution options
    pub fn build_parser(&self) -> Result<TextParser> {
        let mut builder = Config::builder();

        builder = match &self.language_config {
            Some(path) => {
                let config = LanguageConfig::from_path(path).with_context(|| {
                    format!("Failed to load language config: {}", path.display())
                })?;
                log::info!("Using external language config: {}", path.display());
                builder.language_config(config)
            }
            None => builder.language(self.language.unwrap_or_default().code())?,
        };

        if self.parallel {
            builder = builder.execution_mode(ExecutionMode::Parallel);
        } else if self.sequential {
            builder = builder.execution_mode(ExecutionMode::Sequential);
        }

        let config = builder
            .threads(self.threads)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let parser = TextParser::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(parser)
    }

    /// Read every resolved input in order and hand its text to `handle`
    pub fn for_each_input<F>(&self, quiet: bool, mut handle: F) -> Result<()>
    where
        F: FnMut(&InputSource, &str) -> Result<()>,
    {
        let sources = resolve_inputs(&self.input)?;
        log::info!("Processing {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        for source in &sources {
            let text = source.read()?;
            handle(source, &text)?;
            progress.file_completed(&source.to_string());
        }

        progress.finish();
        Ok(())
    }
}
