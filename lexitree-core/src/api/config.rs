//! Configuration API for parsing

use crate::api::{Error, Language};
use crate::application::{ExecutionMode, ExecutionPolicy};
use crate::domain::language::LanguageConfig;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Paragraph candidates from which adaptive mode parses in parallel
    pub const PARALLEL_THRESHOLD: usize = 64;
}

/// Parser configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) language_config: Option<LanguageConfig>,
    pub(crate) execution_mode: ExecutionMode,
    pub(crate) parallel_threshold: usize,
    pub(crate) threads: Option<usize>, // None = global rayon pool
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            language_config: None,
            execution_mode: ExecutionMode::default(),
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Custom language rules overriding the embedded ones
    pub fn language_config(&self) -> Option<&LanguageConfig> {
        self.language_config.as_ref()
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    pub(crate) fn execution_policy(&self) -> ExecutionPolicy {
        ExecutionPolicy {
            mode: self.execution_mode,
            parallel_threshold: self.parallel_threshold,
            threads: self.threads,
        }
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.parallel_threshold == 0 {
            return Err(Error::invalid_config(
                "parallel_threshold must be greater than 0",
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::invalid_config("threads must be greater than 0"));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    language_config: Option<LanguageConfig>,
    execution_mode: Option<ExecutionMode>,
    parallel_threshold: Option<usize>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code or name
    pub fn language(mut self, code: impl Into<String>) -> Result<Self, Error> {
        self.language = Some(code.into());
        Ok(self)
    }

    /// Use custom language rules instead of the embedded ones
    pub fn language_config(mut self, config: LanguageConfig) -> Self {
        self.language_config = Some(config);
        self
    }

    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the candidate count from which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, candidates: usize) -> Self {
        self.parallel_threshold = Some(candidates);
        self
    }

    /// Set the number of threads (None = global pool)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(lang_code) = self.language {
            config.language = Language::from_str(&lang_code)?;
        }

        config.language_config = self.language_config;

        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }

        if let Some(threshold) = self.parallel_threshold {
            config.parallel_threshold = threshold;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}
