//! The ordered stage chain

use super::diagnostics::Diagnostics;
use super::error::ParseError;
use super::execution::{ExecutionPolicy, Executor};
use super::stages::{
    DocumentStage, ExpressionStage, LexemeStage, ParagraphStage, SentenceStage, SymbolStage,
    WordStage,
};
use crate::domain::language::Grammar;
use crate::domain::model::Node;
use std::fmt;
use std::sync::Arc;

/// One link of the parsing chain.
///
/// A stage either recognises `text` and returns a node (using `next` for
/// the node's own children), or hands the untouched text to `next` and
/// returns whatever comes back. `Ok(None)` means nothing downstream
/// recognised the text.
pub trait Stage: Send + Sync {
    /// Short name used in logs and gap reports
    fn name(&self) -> &'static str;

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError>;
}

/// The stages after the current one
#[derive(Clone, Copy)]
pub struct Next<'a> {
    rest: &'a [Box<dyn Stage>],
}

impl<'a> Next<'a> {
    /// Run the following stage, or return `None` at the end of the chain
    pub fn parse(
        self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        match self.rest.split_first() {
            Some((stage, rest)) => stage.parse(text, Next { rest }, diagnostics),
            None => Ok(None),
        }
    }

    /// Name of the stage that would run next
    pub fn stage_name(&self) -> Option<&'static str> {
        self.rest.first().map(|stage| stage.name())
    }
}

/// An immutable, ordered list of stages
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Build a pipeline from stages, outermost first
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Document → paragraph → sentence → lexeme → word → expression → symbol
    pub fn standard(grammar: Arc<Grammar>, policy: ExecutionPolicy) -> Result<Self, ParseError> {
        let executor = Executor::new(policy)?;
        Ok(Self::new(vec![
            Box::new(DocumentStage::new(Arc::clone(&grammar), executor)),
            Box::new(ParagraphStage::new(Arc::clone(&grammar))),
            Box::new(SentenceStage::new(Arc::clone(&grammar))),
            Box::new(LexemeStage::new()),
            Box::new(WordStage::new(Arc::clone(&grammar))),
            Box::new(ExpressionStage::new(Arc::clone(&grammar))),
            Box::new(SymbolStage::new(grammar)),
        ]))
    }

    /// Run `text` through the whole chain
    pub fn run(&self, text: &str, diagnostics: &mut Diagnostics) -> Result<Option<Node>, ParseError> {
        Next {
            rest: &self.stages,
        }
        .parse(text, diagnostics)
    }

    /// Run `text` from the stage called `stage` onwards, e.g. to parse a
    /// single sentence. Unknown names recognise nothing.
    pub fn run_from(
        &self,
        stage: &str,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        match self.stages.iter().position(|s| s.name() == stage) {
            Some(index) => Next {
                rest: &self.stages[index..],
            }
            .parse(text, diagnostics),
            None => Ok(None),
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
