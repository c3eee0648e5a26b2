//! Structural node model
//!
//! Every parsed element is a [`Node`], a closed sum over the seven node
//! kinds. Shared behaviour (text rendering, subtree counts, child access,
//! mutation) is implemented once here by matching on the variant.
//!
//! ```text
//! Document ─┬─ Paragraph ─┬─ Sentence ─┬─ Lexeme ─┬─ Word
//!           │             │            │          ├─ Symbol
//!           │             │            │          └─ Expression
//!           │             │            └─ Symbol (terminator)
//! ```
//!
//! Children are held as [`NodeRef`] (`Arc<Node>`): a node is immutable once
//! attached, and derived documents share unchanged subtrees instead of
//! copying them.

mod composite;
mod leaf;

pub use composite::{Document, Lexeme, Paragraph, Sentence};
pub use leaf::{Expression, Symbol, Word};

use crate::domain::error::ModelError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Shared, read-only handle to a node
pub type NodeRef = Arc<Node>;

/// Indent written in front of every rendered paragraph
pub const PARAGRAPH_INDENT: &str = "    ";

/// Separator written between rendered paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Discriminant of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Document,
    Paragraph,
    Sentence,
    Lexeme,
    Word,
    Symbol,
    Expression,
}

impl NodeKind {
    /// Lowercase name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Sentence => "sentence",
            NodeKind::Lexeme => "lexeme",
            NodeKind::Word => "word",
            NodeKind::Symbol => "symbol",
            NodeKind::Expression => "expression",
        }
    }

    /// Whether nodes of this kind own children
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            NodeKind::Document | NodeKind::Paragraph | NodeKind::Sentence | NodeKind::Lexeme
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the composite text tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document(Document),
    Paragraph(Paragraph),
    Sentence(Sentence),
    Lexeme(Lexeme),
    Word(Word),
    Symbol(Symbol),
    Expression(Expression),
}

impl Node {
    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Sentence(_) => NodeKind::Sentence,
            Node::Lexeme(_) => NodeKind::Lexeme,
            Node::Word(_) => NodeKind::Word,
            Node::Symbol(_) => NodeKind::Symbol,
            Node::Expression(_) => NodeKind::Expression,
        }
    }

    /// Rendered text of this node and its descendants.
    ///
    /// Expressions render as their evaluated value, not their source.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        match self {
            Node::Document(document) => document.write_text(out),
            Node::Paragraph(paragraph) => paragraph.write_text(out),
            Node::Sentence(sentence) => sentence.write_text(out),
            Node::Lexeme(lexeme) => lexeme.write_text(out),
            Node::Word(word) => out.push_str(word.text()),
            Node::Symbol(symbol) => out.push_str(symbol.text()),
            Node::Expression(expression) => out.push_str(&expression.rendered()),
        }
    }

    /// Ordered children; empty for leaves
    pub fn children(&self) -> &[NodeRef] {
        match self {
            Node::Document(document) => document.children(),
            Node::Paragraph(paragraph) => paragraph.children(),
            Node::Sentence(sentence) => sentence.children(),
            Node::Lexeme(lexeme) => lexeme.children(),
            Node::Word(_) | Node::Symbol(_) | Node::Expression(_) => &[],
        }
    }

    /// Number of words in this subtree
    pub fn word_count(&self) -> usize {
        self.tally(NodeKind::Word)
    }

    /// Number of sentences in this subtree (a sentence counts itself)
    pub fn sentence_count(&self) -> usize {
        self.tally(NodeKind::Sentence)
    }

    /// Number of paragraphs in this subtree (a paragraph counts itself)
    pub fn paragraph_count(&self) -> usize {
        self.tally(NodeKind::Paragraph)
    }

    fn tally(&self, kind: NodeKind) -> usize {
        usize::from(self.kind() == kind) + tally(self.children(), kind)
    }

    /// Append a child. Fails on leaves.
    pub fn add(&mut self, child: impl Into<Node>) -> Result<(), ModelError> {
        let kind = self.kind();
        match self {
            Node::Document(document) => document.push(child),
            Node::Paragraph(paragraph) => paragraph.push(child),
            Node::Sentence(sentence) => sentence.push(child),
            Node::Lexeme(lexeme) => lexeme.push(child),
            Node::Word(_) | Node::Symbol(_) | Node::Expression(_) => {
                return Err(ModelError::UnsupportedOperation {
                    operation: "add",
                    kind,
                })
            }
        }
        Ok(())
    }

    /// Remove the first child equal to `child`, returning it if present.
    /// Fails on leaves.
    pub fn remove(&mut self, child: &Node) -> Result<Option<NodeRef>, ModelError> {
        let kind = self.kind();
        let removed = match self {
            Node::Document(document) => document.remove(child),
            Node::Paragraph(paragraph) => paragraph.remove(child),
            Node::Sentence(sentence) => sentence.remove(child),
            Node::Lexeme(lexeme) => lexeme.remove(child),
            Node::Word(_) | Node::Symbol(_) | Node::Expression(_) => {
                return Err(ModelError::UnsupportedOperation {
                    operation: "remove",
                    kind,
                })
            }
        };
        Ok(removed)
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Node::Document(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Node::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_sentence(&self) -> Option<&Sentence> {
        match self {
            Node::Sentence(sentence) => Some(sentence),
            _ => None,
        }
    }

    pub fn as_lexeme(&self) -> Option<&Lexeme> {
        match self {
            Node::Lexeme(lexeme) => Some(lexeme),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Node::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Node::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    /// Every word leaf in this subtree, in document order
    pub fn words(&self) -> Vec<&Word> {
        let mut words = Vec::new();
        collect_words(self, &mut words);
        words
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

macro_rules! impl_into_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_into_node!(Document, Paragraph, Sentence, Lexeme, Word, Symbol, Expression);

pub(crate) fn tally(children: &[NodeRef], kind: NodeKind) -> usize {
    children.iter().map(|child| child.tally(kind)).sum()
}

pub(crate) fn collect_words<'a>(node: &'a Node, out: &mut Vec<&'a Word>) {
    match node {
        Node::Word(word) => out.push(word),
        _ => {
            for child in node.children() {
                collect_words(child, out);
            }
        }
    }
}
