//! Language rules: TOML configuration and the compiled [`Grammar`]

pub mod config;
mod grammar;

pub use config::{get_language_config, list_available_languages, LanguageConfig};
pub use grammar::{EnclosedWord, Grammar};
