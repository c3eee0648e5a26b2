//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to describe your alphabet and punctuation");
        println!("2. Validate your configuration:");
        println!(
            "   lexitree validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for parsing:");
        println!(
            "   lexitree parse -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# One entry per alphabet. `letters` is the body of a regex character
# class, `vowels` lists every vowel literally (both cases).
[[scripts]]
name = "latin"
letters = "a-zA-Z"
vowels = "aeiouAEIOU"

[paragraph]
# A paragraph starts with one of these markers
indent_markers = ["\t", "    "]
# Unindented text is not accepted as a paragraph
require_indent = true

[sentence]
# Characters that end a sentence
terminators = [".", "!", "?"]
# Kept as a single symbol; also ends a sentence
ellipsis = "..."

[lexicon]
# Characters allowed between letters inside one word
word_joiners = ["-", "'"]
punctuation = [".", ",", "!", "?", ";", ":", "-"]
quotes = ['"', "'"]
# Accept digits and underscores inside words
word_allows_digits = false
brackets = [
    {{ open = "(", close = ")" }},
    {{ open = "[", close = "]" }},
]

[expression]
# Operator characters accepted around numbers; only + - * / evaluate
operators = ["+", "-", "*", "/"]
"#,
            code = self.language_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexitree_core::{Grammar, LanguageConfig};
    use tempfile::TempDir;

    #[test]
    fn test_template_compiles() {
        let args = GenerateConfigArgs {
            language_code: "xx".to_string(),
            output: PathBuf::from("unused.toml"),
        };

        let config = LanguageConfig::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(config.metadata.code, "xx");

        let grammar = Grammar::from_config(&config).unwrap();
        assert!(grammar.is_word("well-known"));
        assert!(grammar.is_terminator('!'));
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            output: temp_dir.path().join("test.toml"),
        };

        args.execute().unwrap();

        let content = std::fs::read_to_string(&args.output).unwrap();
        assert!(content.contains("code = \"test\""));
        assert!(content.contains("[[scripts]]"));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            output: PathBuf::from("/nonexistent/dir/test.toml"),
        };
        assert!(args.execute().unwrap_err().to_string().contains("Failed to write"));
    }
}
