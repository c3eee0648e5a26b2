//! Language type for the API

use crate::api::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Languages with an embedded configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Latin script
    #[default]
    English,
    /// Cyrillic script, Latin accepted in mixed text
    Russian,
}

impl Language {
    /// Every supported language
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Russian]
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ru" | "rus" | "russian" => Ok(Language::Russian),
            _ => Err(Error::InvalidLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
