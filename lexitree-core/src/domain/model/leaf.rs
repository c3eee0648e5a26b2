//! Leaf nodes: word, symbol and evaluated expression

use crate::domain::error::ModelError;
use crate::domain::language::Grammar;

/// A word matching the grammar's word shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Build a word, rejecting text that does not match the word shape
    pub fn new(text: impl Into<String>, grammar: &Grammar) -> Result<Self, ModelError> {
        let text = text.into();
        if !grammar.is_word(&text) {
            return Err(ModelError::InvalidWord(text));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One character, or the grammar's ellipsis literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    text: String,
    ellipsis: bool,
}

impl Symbol {
    /// Build a symbol from a single character or the ellipsis literal
    pub fn new(text: impl Into<String>, grammar: &Grammar) -> Result<Self, ModelError> {
        let text = text.into();
        if text == grammar.ellipsis() {
            return Ok(Self {
                text,
                ellipsis: true,
            });
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => Ok(Self {
                text,
                ellipsis: false,
            }),
            _ => Err(ModelError::InvalidSymbol(text)),
        }
    }

    pub fn from_char(ch: char) -> Self {
        Self {
            text: ch.to_string(),
            ellipsis: false,
        }
    }

    /// The grammar's ellipsis as a single atomic symbol
    pub fn ellipsis(grammar: &Grammar) -> Self {
        Self {
            text: grammar.ellipsis().to_string(),
            ellipsis: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The character, unless this is the ellipsis
    pub fn as_char(&self) -> Option<char> {
        if self.ellipsis {
            None
        } else {
            self.text.chars().next()
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.ellipsis
    }

    pub fn is_letter(&self, grammar: &Grammar) -> bool {
        self.as_char().is_some_and(|ch| grammar.is_letter(ch))
    }

    pub fn is_digit(&self, grammar: &Grammar) -> bool {
        self.as_char().is_some_and(|ch| grammar.is_digit(ch))
    }

    pub fn is_whitespace(&self) -> bool {
        self.as_char().is_some_and(char::is_whitespace)
    }

    pub fn is_punctuation(&self, grammar: &Grammar) -> bool {
        self.ellipsis || self.as_char().is_some_and(|ch| grammar.is_punctuation(ch))
    }

    pub fn is_operator(&self, grammar: &Grammar) -> bool {
        self.as_char().is_some_and(|ch| grammar.is_operator(ch))
    }
}

/// An arithmetic token replaced by its value
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    value: f64,
}

impl Expression {
    pub fn new(source: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            value,
        }
    }

    /// The arithmetic text as it appeared in the input
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The value as it appears in rendered text (`14`, `2.5`)
    pub fn rendered(&self) -> String {
        format!("{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_rejects_invalid_shape() {
        let grammar = Grammar::default();
        assert!(matches!(
            Word::new("abc123!", &grammar),
            Err(ModelError::InvalidWord(text)) if text == "abc123!"
        ));
        assert!(Word::new("", &grammar).is_err());
        assert!(Word::new("two words", &grammar).is_err());
    }

    #[test]
    fn test_word_accepts_joined_groups() {
        let grammar = Grammar::default();
        for text in ["fox", "well-known", "don't", "U.S.A"] {
            assert!(Word::new(text, &grammar).is_ok(), "{text} should be a word");
        }
        assert_eq!(Word::new("fox", &grammar).unwrap().char_len(), 3);
    }

    #[test]
    fn test_symbol_construction() {
        let grammar = Grammar::default();
        assert!(matches!(
            Symbol::new("ab", &grammar),
            Err(ModelError::InvalidSymbol(_))
        ));
        assert!(Symbol::new("", &grammar).is_err());

        let ellipsis = Symbol::new("...", &grammar).unwrap();
        assert!(ellipsis.is_ellipsis());
        assert!(ellipsis.is_punctuation(&grammar));
        assert!(!ellipsis.is_letter(&grammar));
        assert_eq!(ellipsis.as_char(), None);

        let dot = Symbol::new(".", &grammar).unwrap();
        assert!(!dot.is_ellipsis());
        assert_eq!(dot.as_char(), Some('.'));
    }

    #[test]
    fn test_symbol_classes_may_overlap() {
        let grammar = Grammar::default();
        let minus = Symbol::from_char('-');
        assert!(minus.is_punctuation(&grammar));
        assert!(minus.is_operator(&grammar));
        assert!(!minus.is_letter(&grammar));

        assert!(Symbol::from_char('7').is_digit(&grammar));
        assert!(Symbol::from_char('q').is_letter(&grammar));
        assert!(Symbol::from_char(' ').is_whitespace());
    }

    #[test]
    fn test_expression_renders_value() {
        assert_eq!(Expression::new("2 + 3 * 4", 14.0).rendered(), "14");
        assert_eq!(Expression::new("5/2", 2.5).rendered(), "2.5");
        assert_eq!(Expression::new("1-4", -3.0).rendered(), "-3");
        assert_eq!(Expression::new("5000*2000", 1.0e7).rendered(), "10000000");
        assert_eq!(Expression::new("5/2", 2.5).source(), "5/2");
    }
}
