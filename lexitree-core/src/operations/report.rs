//! All analyses over one document, in a serializable report

use super::letters::{count_vowels_consonants, document_letter_summary, LetterCount, SentenceLetterCount};
use super::structure::{
    find_sentences_with_longest_word, longest_word_length, paragraph_order_by_sentence_count,
    remove_short_sentences,
};
use super::words::{duplicate_words, most_frequent_words};
use crate::domain::language::Grammar;
use crate::domain::model::Document;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of entries in [`AnalysisReport::top_words`]
pub const TOP_WORDS: usize = 10;

/// Node counts of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStatistics {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
}

impl DocumentStatistics {
    pub fn of(document: &Document) -> Self {
        Self {
            paragraphs: document.paragraph_count(),
            sentences: document.sentence_count(),
            words: document.word_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphSummary {
    /// Position in the source document, from zero
    pub position: usize,
    pub sentences: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub language: String,
    pub statistics: DocumentStatistics,
    /// Paragraphs in ascending sentence count
    pub paragraphs_by_sentence_count: Vec<ParagraphSummary>,
    pub longest_word_length: Option<usize>,
    pub sentences_with_longest_word: Vec<String>,
    pub min_words: usize,
    /// Counts once sentences below `min_words` are removed
    pub after_short_sentence_removal: DocumentStatistics,
    pub filtered_text: String,
    pub duplicate_words: BTreeMap<String, usize>,
    pub top_words: Vec<WordFrequency>,
    pub letters: Vec<SentenceLetterCount>,
    pub letter_summary: LetterCount,
}

/// Run every analysis over `document`
pub fn analyze(document: &Document, grammar: &Grammar, min_words: usize) -> AnalysisReport {
    let paragraphs: Vec<_> = document.paragraphs().collect();
    let paragraphs_by_sentence_count = paragraph_order_by_sentence_count(document)
        .into_iter()
        .map(|position| ParagraphSummary {
            position,
            sentences: paragraphs[position].sentence_count(),
            text: paragraphs[position].text(),
        })
        .collect();

    let filtered = remove_short_sentences(document, min_words);

    AnalysisReport {
        language: grammar.code().to_string(),
        statistics: DocumentStatistics::of(document),
        paragraphs_by_sentence_count,
        longest_word_length: longest_word_length(document),
        sentences_with_longest_word: find_sentences_with_longest_word(document)
            .iter()
            .map(|sentence| sentence.text())
            .collect(),
        min_words,
        after_short_sentence_removal: DocumentStatistics::of(&filtered),
        filtered_text: filtered.text(),
        duplicate_words: duplicate_words(document),
        top_words: most_frequent_words(document, TOP_WORDS)
            .into_iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect(),
        letters: count_vowels_consonants(document, grammar),
        letter_summary: document_letter_summary(document, grammar),
    }
}
