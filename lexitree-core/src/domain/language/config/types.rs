use crate::domain::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: MetadataConfig,
    pub scripts: Vec<ScriptConfig>,
    pub paragraph: ParagraphConfig,
    pub sentence: SentenceConfig,
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub expression: ExpressionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

/// One alphabet: letters as a regex class body (`a-zA-Z`), vowels listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub name: String,
    pub letters: String,
    #[serde(default)]
    pub vowels: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphConfig {
    pub indent_markers: Vec<String>,
    #[serde(default = "default_true")]
    pub require_indent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceConfig {
    pub terminators: Vec<char>,
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub word_joiners: Vec<char>,
    pub punctuation: Vec<char>,
    #[serde(default)]
    pub quotes: Vec<char>,
    #[serde(default)]
    pub brackets: Vec<BracketPair>,
    /// Looser word shape that also admits digits and underscore
    #[serde(default)]
    pub word_allows_digits: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionConfig {
    #[serde(default = "default_operators")]
    pub operators: Vec<char>,
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            operators: default_operators(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_operators() -> Vec<char> {
    vec!['+', '-', '*', '/']
}

impl LanguageConfig {
    /// Parse a TOML language definition
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML language definition from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
