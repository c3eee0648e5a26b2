//! Composite nodes: document, paragraph, sentence and lexeme

use super::{collect_words, tally, Node, NodeKind, NodeRef, Symbol, Word};
use super::{PARAGRAPH_INDENT, PARAGRAPH_SEPARATOR};
use smallvec::SmallVec;
use std::sync::Arc;

/// Shared child-list plumbing for the composites that hold a plain `Vec`.
macro_rules! composite_children {
    ($name:ident) => {
        impl $name {
            /// Create an empty node
            pub fn new() -> Self {
                Self::default()
            }

            /// Create a node owning (or sharing) the given children
            pub fn with_children(children: Vec<NodeRef>) -> Self {
                Self { children }
            }

            /// Ordered children
            pub fn children(&self) -> &[NodeRef] {
                &self.children
            }

            /// Append an owned child
            pub fn push(&mut self, child: impl Into<Node>) {
                self.children.push(Arc::new(child.into()));
            }

            /// Append a shared child
            pub fn push_ref(&mut self, child: NodeRef) {
                self.children.push(child);
            }

            /// Remove the first child equal to `child`
            pub fn remove(&mut self, child: &Node) -> Option<NodeRef> {
                let index = self.children.iter().position(|c| c.as_ref() == child)?;
                Some(self.children.remove(index))
            }

            /// Number of direct children
            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }

            /// Rendered text of the subtree
            pub fn text(&self) -> String {
                let mut out = String::new();
                self.write_text(&mut out);
                out
            }

            pub fn word_count(&self) -> usize {
                tally(&self.children, NodeKind::Word)
            }

            /// Every word leaf below this node, in order
            pub fn words(&self) -> Vec<&Word> {
                let mut words = Vec::new();
                for child in &self.children {
                    collect_words(child, &mut words);
                }
                words
            }
        }
    };
}

/// Root of a parsed text: an ordered list of paragraphs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    children: Vec<NodeRef>,
}

composite_children!(Document);

impl Document {
    pub fn paragraph_count(&self) -> usize {
        tally(&self.children, NodeKind::Paragraph)
    }

    pub fn sentence_count(&self) -> usize {
        tally(&self.children, NodeKind::Sentence)
    }

    /// Paragraph children, in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.children.iter().filter_map(|child| child.as_paragraph())
    }

    /// Every sentence of every paragraph, in order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs().flat_map(|paragraph| paragraph.sentences())
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(PARAGRAPH_SEPARATOR);
            }
            child.write_text(out);
        }
    }
}

/// An indented block of sentences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    children: Vec<NodeRef>,
}

composite_children!(Paragraph);

impl Paragraph {
    pub fn sentence_count(&self) -> usize {
        tally(&self.children, NodeKind::Sentence)
    }

    /// Sentence children, in order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.children.iter().filter_map(|child| child.as_sentence())
    }

    /// Shared handles to the sentence children, for building derived
    /// paragraphs without copying
    pub fn sentence_refs(&self) -> impl Iterator<Item = &NodeRef> {
        self.children
            .iter()
            .filter(|child| child.kind() == NodeKind::Sentence)
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        out.push_str(PARAGRAPH_INDENT);
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            child.write_text(out);
        }
    }
}

/// Lexemes followed by a terminating punctuation symbol
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    children: Vec<NodeRef>,
}

composite_children!(Sentence);

impl Sentence {
    /// The trailing punctuation symbol, when present
    pub fn terminator(&self) -> Option<&Symbol> {
        self.children.last().and_then(|child| child.as_symbol())
    }

    /// Lexeme children, in order
    pub fn lexemes(&self) -> impl Iterator<Item = &Lexeme> {
        self.children.iter().filter_map(|child| child.as_lexeme())
    }

    // Bare symbols (the terminator) attach to the preceding lexeme.
    pub(crate) fn write_text(&self, out: &mut String) {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 && child.kind() != NodeKind::Symbol {
                out.push(' ');
            }
            child.write_text(out);
        }
    }
}

/// A whitespace-bounded token and its internal structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexeme {
    source: String,
    children: SmallVec<[NodeRef; 4]>,
}

impl Lexeme {
    /// Create an empty lexeme for the given source token
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            children: SmallVec::new(),
        }
    }

    /// Create a lexeme holding a single child
    pub fn wrap(source: impl Into<String>, child: impl Into<Node>) -> Self {
        let mut lexeme = Self::new(source);
        lexeme.push(child);
        lexeme
    }

    /// Create a lexeme from existing children
    pub fn with_children(source: impl Into<String>, children: impl IntoIterator<Item = NodeRef>) -> Self {
        Self {
            source: source.into(),
            children: children.into_iter().collect(),
        }
    }

    /// The token text this lexeme was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    pub fn into_children(self) -> SmallVec<[NodeRef; 4]> {
        self.children
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(Arc::new(child.into()));
    }

    pub fn remove(&mut self, child: &Node) -> Option<NodeRef> {
        let index = self.children.iter().position(|c| c.as_ref() == child)?;
        Some(self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    pub fn word_count(&self) -> usize {
        tally(&self.children, NodeKind::Word)
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        for child in &self.children {
            child.write_text(out);
        }
    }
}
