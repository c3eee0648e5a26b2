use crate::application::diagnostics::Diagnostics;
use crate::application::error::ParseError;
use crate::application::pipeline::{Next, Stage};
use crate::domain::language::Grammar;
use crate::domain::model::{Lexeme, Node, Symbol, Word};
use std::sync::Arc;

/// Recognises a word, a word with trailing punctuation, or a word inside
/// one layer of brackets or quotes
#[derive(Debug)]
pub struct WordStage {
    grammar: Arc<Grammar>,
}

impl WordStage {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self { grammar }
    }

    fn symbol(&self, text: &str) -> Result<Symbol, ParseError> {
        Ok(Symbol::new(text, &self.grammar)?)
    }
}

impl Stage for WordStage {
    fn name(&self) -> &'static str {
        "word"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        let grammar = &self.grammar;

        if grammar.is_word(text) {
            return Ok(Some(Node::Word(Word::new(text, grammar)?)));
        }

        if let Some((word, punctuation)) = grammar.match_word_with_punctuation(text) {
            let mut lexeme = Lexeme::new(text);
            lexeme.push(Word::new(word, grammar)?);
            lexeme.push(self.symbol(punctuation)?);
            return Ok(Some(Node::Lexeme(lexeme)));
        }

        if let Some(enclosed) = grammar.match_enclosed_word(text) {
            let mut lexeme = Lexeme::new(text);
            if let Some(open) = enclosed.open {
                lexeme.push(self.symbol(open)?);
            }
            lexeme.push(Word::new(enclosed.word, grammar)?);
            for symbol in [enclosed.close, enclosed.trailing].into_iter().flatten() {
                lexeme.push(self.symbol(symbol)?);
            }
            return Ok(Some(Node::Lexeme(lexeme)));
        }

        next.parse(text, diagnostics)
    }
}
