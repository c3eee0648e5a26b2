//! Read-only analyses over a parsed [`Document`](crate::Document)
//!
//! None of these mutate their input. [`remove_short_sentences`] builds a
//! new document that shares the kept sentences with the original.

mod letters;
mod report;
mod structure;
mod words;

pub use letters::{
    count_vowels_consonants, document_letter_summary, LetterCount, SentenceLetterCount,
};
pub use report::{
    analyze, AnalysisReport, DocumentStatistics, ParagraphSummary, WordFrequency, TOP_WORDS,
};
pub use structure::{
    find_sentences_with_longest_word, longest_word_length, paragraph_order_by_sentence_count,
    remove_short_sentences, sort_paragraphs_by_sentence_count,
};
pub use words::{count_identical_words, duplicate_words, most_frequent_words};
