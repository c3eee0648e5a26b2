//! Main text parser implementation

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::api::{Config, Error, Result};
use crate::application::{Diagnostics, ParseError, Pipeline};
use crate::domain::expression::ExpressionError;
use crate::domain::language::Grammar;
use crate::domain::model::{Document, Node};

static DEFAULT_PARSER: OnceLock<TextParser> = OnceLock::new();

/// A parsed document together with the gaps found while building it
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

/// Text parser with a fixed stage pipeline
#[derive(Debug)]
pub struct TextParser {
    pipeline: Pipeline,
    grammar: Arc<Grammar>,
    config: Config,
}

impl TextParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Default config should always be valid")
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let grammar = match config.language_config() {
            Some(language_config) => Grammar::from_config(language_config)?,
            None => Grammar::for_language(config.language().code())?,
        };
        let grammar = Arc::new(grammar);
        let pipeline = Pipeline::standard(Arc::clone(&grammar), config.execution_policy())?;
        log::debug!(
            "parser ready: language={}, stages={:?}",
            grammar.code(),
            pipeline.stage_names()
        );

        Ok(Self {
            pipeline,
            grammar,
            config,
        })
    }

    /// Create a parser for a specific language
    pub fn with_language(lang_code: impl Into<String>) -> Result<Self> {
        let config = Config::builder().language(lang_code)?.build()?;
        Self::with_config(config)
    }

    /// Parse text into a document. Dropped fragments are logged; use
    /// [`parse_with_diagnostics`](Self::parse_with_diagnostics) to inspect
    /// them.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let output = self.parse_with_diagnostics(text)?;
        if !output.diagnostics.is_clean() {
            log::warn!(
                "{} fragments could not be parsed and were left out",
                output.diagnostics.gap_count()
            );
        }
        Ok(output.document)
    }

    /// Parse text and return the document with every recorded gap
    pub fn parse_with_diagnostics(&self, text: &str) -> Result<ParseOutput> {
        let start = Instant::now();
        let mut diagnostics = Diagnostics::new();

        let document = match self.pipeline.run(text, &mut diagnostics)? {
            Some(Node::Document(document)) => document,
            _ => {
                let stage = self.pipeline.stage_names().first().copied().unwrap_or("empty");
                return Err(Error::Parse(ParseError::Unrecognized { stage }));
            }
        };

        log::info!(
            "parsed {} bytes into {} paragraphs, {} sentences, {} words in {:?}",
            text.len(),
            document.paragraph_count(),
            document.sentence_count(),
            document.word_count(),
            start.elapsed()
        );

        Ok(ParseOutput {
            document,
            diagnostics,
        })
    }

    /// Evaluate an arithmetic expression with this parser's operator set
    pub fn evaluate(&self, expression: &str) -> std::result::Result<f64, ExpressionError> {
        self.grammar.evaluator().evaluate(expression)
    }

    /// Grammar shared by the pipeline stages
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse text with the default English parser
pub fn parse(text: &str) -> Result<Document> {
    DEFAULT_PARSER.get_or_init(TextParser::new).parse(text)
}
