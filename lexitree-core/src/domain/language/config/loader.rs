use super::types::LanguageConfig;
use crate::domain::error::ConfigError;
use std::collections::HashMap;
use std::sync::OnceLock;

static LANGUAGE_CONFIGS: OnceLock<HashMap<String, LanguageConfig>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> Result<HashMap<String, LanguageConfig>, ConfigError> {
    let mut configs = HashMap::new();

    let embedded_configs = [
        embed_language_config!("en", "../../../../configs/languages/english.toml"),
        embed_language_config!("ru", "../../../../configs/languages/russian.toml"),
    ];

    for (code, toml_content) in embedded_configs {
        let config = LanguageConfig::from_toml_str(toml_content)?;

        if config.metadata.code != code {
            return Err(ConfigError::Invalid(format!(
                "embedded config code mismatch: expected {code}, got {}",
                config.metadata.code
            )));
        }

        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn configs() -> &'static HashMap<String, LanguageConfig> {
    LANGUAGE_CONFIGS
        .get_or_init(|| load_embedded_configs().expect("Failed to load embedded language configs"))
}

/// Embedded configuration for a language code
pub fn get_language_config(code: &str) -> Result<&'static LanguageConfig, ConfigError> {
    configs()
        .get(code)
        .ok_or_else(|| ConfigError::UnsupportedLanguage(code.to_string()))
}

/// Codes of every embedded language, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = configs().keys().map(|s| s.as_str()).collect();
    codes.sort_unstable();
    codes
}
