use crate::application::diagnostics::{Diagnostics, GapReason};
use crate::application::error::ParseError;
use crate::application::pipeline::{Next, Stage};
use crate::domain::language::Grammar;
use crate::domain::model::{Lexeme, Node, Symbol};
use std::sync::Arc;

/// Last stage: keeps whatever is left of a token as symbols.
///
/// A single character or the ellipsis becomes one symbol. A longer token
/// becomes a run of symbols; characters no class recognises are recorded
/// as dropped. Returns `None` when nothing in the token can be kept.
#[derive(Debug)]
pub struct SymbolStage {
    grammar: Arc<Grammar>,
}

impl SymbolStage {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self { grammar }
    }
}

impl Stage for SymbolStage {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn parse(
        &self,
        text: &str,
        next: Next<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Node>, ParseError> {
        let grammar = &self.grammar;
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return next.parse(text, diagnostics);
        }
        if text == grammar.ellipsis() {
            return Ok(Some(Node::Symbol(Symbol::ellipsis(grammar))));
        }

        let mut chars = text.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if grammar.is_symbol_char(ch) {
                return Ok(Some(Node::Symbol(Symbol::from_char(ch))));
            }
            return next.parse(text, diagnostics);
        }

        let mut run = Lexeme::new(text);
        let mut dropped = Vec::new();
        let mut rest = text;
        while let Some(ch) = rest.chars().next() {
            if let Some(after) = rest.strip_prefix(grammar.ellipsis()) {
                run.push(Symbol::ellipsis(grammar));
                rest = after;
                continue;
            }
            if grammar.is_symbol_char(ch) {
                run.push(Symbol::from_char(ch));
            } else {
                dropped.push(ch);
            }
            rest = &rest[ch.len_utf8()..];
        }

        if run.is_empty() {
            return next.parse(text, diagnostics);
        }
        for ch in dropped {
            diagnostics.record(self.name(), ch, GapReason::DroppedCharacter);
        }
        Ok(Some(Node::Lexeme(run)))
    }
}
