//! Word frequency

use crate::domain::model::Document;
use std::collections::BTreeMap;

/// Occurrences of every word, case-folded to lowercase
pub fn count_identical_words(document: &Document) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in document.words() {
        *counts.entry(word.text().to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Words occurring more than once, case-folded
pub fn duplicate_words(document: &Document) -> BTreeMap<String, usize> {
    let mut counts = count_identical_words(document);
    counts.retain(|_, count| *count > 1);
    counts
}

/// The `limit` most frequent words, most frequent first, ties alphabetical
pub fn most_frequent_words(document: &Document, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = count_identical_words(document).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(limit);
    counts
}
