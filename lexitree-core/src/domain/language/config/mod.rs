//! TOML language definitions, embedded at build time

mod loader;
mod types;

pub use loader::{get_language_config, list_available_languages};
pub use types::{
    BracketPair, ExpressionConfig, LanguageConfig, LexiconConfig, MetadataConfig,
    ParagraphConfig, ScriptConfig, SentenceConfig,
};
