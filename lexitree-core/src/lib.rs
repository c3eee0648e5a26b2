//! Stage-pipeline text parser with inline arithmetic evaluation
//!
//! Raw text is decomposed by a fixed chain of stages into a composite tree:
//! document → paragraph → sentence → lexeme → word / symbol / expression.
//! Arithmetic tokens such as `2+3*4` are evaluated while parsing and the
//! tree stores the computed value in their place.
//!
//! # Architecture
//!
//! The crate follows the same layering as the rest of the workspace:
//! - **Domain layer**: node model, expression evaluator, language grammar
//! - **Application layer**: the stage pipeline and its execution modes
//! - **Operations**: read-only analyses over a parsed [`Document`]
//! - **API layer**: the [`TextParser`] facade and its [`Config`]
//!
//! # Example
//!
//! ```rust
//! use lexitree_core::TextParser;
//!
//! let parser = TextParser::new();
//! let document = parser
//!     .parse("\tThe quick fox jumps. It is fast!\n\n\tAnother line here. Short.")
//!     .unwrap();
//!
//! assert_eq!(document.paragraph_count(), 2);
//! assert_eq!(document.sentence_count(), 4);
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod operations;

pub use api::{parse, Config, ConfigBuilder, Error, Language, ParseOutput, Result, TextParser};
pub use application::{Diagnostics, ExecutionMode, Gap, GapReason, ParseError, Pipeline, Stage};
pub use domain::expression::{evaluate, is_valid_expression, EvalError, Evaluator, ExpressionError};
pub use domain::language::{Grammar, LanguageConfig};
pub use domain::model::{
    Document, Expression, Lexeme, Node, NodeKind, NodeRef, Paragraph, Sentence, Symbol, Word,
};
pub use domain::{ConfigError, ModelError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level_example() {
        let document = parse("\tThe quick fox jumps. It is fast!").unwrap();
        assert_eq!(document.paragraph_count(), 1);
        assert_eq!(document.sentence_count(), 2);
        assert_eq!(document.word_count(), 7);
    }

    #[test]
    fn test_public_exports() {
        let _ = Config::default();
        let _ = Language::default();
        let _ = ExecutionMode::default();
        let _ = Diagnostics::new();
        assert_eq!(evaluate("1 + 1").unwrap(), 2.0);
    }
}
