//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Marker accepted in place of a file to read standard input
pub const STDIN_MARKER: &str = "-";

/// Where one document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Read the whole source as UTF-8 text
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs, keeping `-` as standard input.
///
/// Stdin comes first when given, followed by every file the patterns match.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<&String>, Vec<&String>) =
        inputs.iter().partition(|input| input.as_str() == STDIN_MARKER);

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }
    if !patterns.is_empty() {
        let patterns: Vec<String> = patterns.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&patterns)?.into_iter().map(InputSource::File));
    }
    Ok(sources)
}
