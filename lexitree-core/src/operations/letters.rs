//! Vowel and consonant counts

use crate::domain::language::Grammar;
use crate::domain::model::Document;
use serde::Serialize;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LetterCount {
    pub vowels: usize,
    pub consonants: usize,
}

impl LetterCount {
    /// Count the vowels and consonants of `text` under `grammar`
    pub fn of(text: &str, grammar: &Grammar) -> Self {
        let mut count = Self::default();
        for ch in text.chars() {
            if grammar.is_vowel(ch) {
                count.vowels += 1;
            } else if grammar.is_consonant(ch) {
                count.consonants += 1;
            }
        }
        count
    }

    pub fn total(&self) -> usize {
        self.vowels + self.consonants
    }
}

impl AddAssign for LetterCount {
    fn add_assign(&mut self, other: Self) {
        self.vowels += other.vowels;
        self.consonants += other.consonants;
    }
}

/// Letter counts of one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceLetterCount {
    /// Position of the sentence in the document, from zero
    pub index: usize,
    pub text: String,
    pub counts: LetterCount,
}

/// Vowels and consonants per sentence, in document order.
///
/// Counted over the rendered text, so evaluated expressions contribute
/// nothing.
pub fn count_vowels_consonants(document: &Document, grammar: &Grammar) -> Vec<SentenceLetterCount> {
    document
        .sentences()
        .enumerate()
        .map(|(index, sentence)| {
            let text = sentence.text();
            let counts = LetterCount::of(&text, grammar);
            SentenceLetterCount {
                index,
                text,
                counts,
            }
        })
        .collect()
}

/// Vowels and consonants of the whole rendered document
pub fn document_letter_summary(document: &Document, grammar: &Grammar) -> LetterCount {
    LetterCount::of(&document.text(), grammar)
}
