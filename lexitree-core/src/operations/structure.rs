//! Operations over the paragraph and sentence structure

use crate::domain::model::{Document, Paragraph, Sentence};

/// Paragraph positions (from zero) in ascending order of sentence count.
/// Ties keep document order.
pub fn paragraph_order_by_sentence_count(document: &Document) -> Vec<usize> {
    let counts: Vec<usize> = document
        .paragraphs()
        .map(|paragraph| paragraph.sentence_count())
        .collect();
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by_key(|&position| counts[position]);
    order
}

/// Paragraphs in ascending order of sentence count. Ties keep document
/// order.
pub fn sort_paragraphs_by_sentence_count(document: &Document) -> Vec<&Paragraph> {
    let paragraphs: Vec<&Paragraph> = document.paragraphs().collect();
    paragraph_order_by_sentence_count(document)
        .into_iter()
        .map(|position| paragraphs[position])
        .collect()
}

/// Length in characters of the longest word in the document
pub fn longest_word_length(document: &Document) -> Option<usize> {
    document.words().iter().map(|word| word.char_len()).max()
}

/// Every sentence containing a word of the document's maximum length, in
/// document order. Empty when the document has no words.
pub fn find_sentences_with_longest_word(document: &Document) -> Vec<&Sentence> {
    let Some(longest) = longest_word_length(document) else {
        return Vec::new();
    };
    document
        .sentences()
        .filter(|sentence| sentence.words().iter().any(|word| word.char_len() == longest))
        .collect()
}

/// A new document without sentences of fewer than `min_words` words.
///
/// Kept sentences are shared with `document`, not copied. Paragraphs left
/// with no sentences are dropped.
pub fn remove_short_sentences(document: &Document, min_words: usize) -> Document {
    let mut filtered = Document::new();
    for paragraph in document.paragraphs() {
        let kept: Vec<_> = paragraph
            .sentence_refs()
            .filter(|sentence| sentence.word_count() >= min_words)
            .cloned()
            .collect();
        if !kept.is_empty() {
            filtered.push(Paragraph::with_children(kept));
        }
    }
    log::debug!(
        "removed {} sentences shorter than {min_words} words",
        document.sentence_count() - filtered.sentence_count()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse;
    use std::sync::Arc;

    #[test]
    fn test_sort_is_stable() {
        let document = parse("\tA b. C d. E f.\n\n\tFirst one.\n\n\tG h. I j.\n\n\tSecond one.").unwrap();
        let sorted: Vec<String> = sort_paragraphs_by_sentence_count(&document)
            .iter()
            .map(|p| p.text())
            .collect();
        assert_eq!(
            sorted,
            vec![
                "    First one.",
                "    Second one.",
                "    G h. I j.",
                "    A b. C d. E f.",
            ]
        );
    }

    #[test]
    fn test_order_matches_sorted_paragraphs() {
        let document = parse("\tA b. C d.\n\n\tOne.\n\n\tE f. G h. I j.\n\n\tTwo.").unwrap();
        let order = paragraph_order_by_sentence_count(&document);
        assert_eq!(order, vec![1, 3, 0, 2]);

        let paragraphs: Vec<_> = document.paragraphs().collect();
        let sorted = sort_paragraphs_by_sentence_count(&document);
        for (position, paragraph) in order.iter().zip(sorted) {
            assert!(std::ptr::eq(paragraphs[*position], paragraph));
        }
    }

    #[test]
    fn test_longest_word_ties() {
        let document = parse("\tShort words here. Enormous thing. Tiny.\n\n\tGigantic too!").unwrap();
        let found: Vec<String> = find_sentences_with_longest_word(&document)
            .iter()
            .map(|s| s.text())
            .collect();
        assert_eq!(found, vec!["Enormous thing.", "Gigantic too!"]);
        assert_eq!(longest_word_length(&document), Some(8));
    }

    #[test]
    fn test_longest_word_empty_document() {
        let document = parse("").unwrap();
        assert!(find_sentences_with_longest_word(&document).is_empty());
    }

    #[test]
    fn test_remove_short_sentences_drops_empty_paragraphs() {
        let document = parse("\tThe quick fox jumps. It is fast!\n\n\tToo short.").unwrap();
        let filtered = remove_short_sentences(&document, 3);

        assert_eq!(filtered.paragraph_count(), 1);
        assert_eq!(filtered.sentence_count(), 2);
        assert_eq!(document.sentence_count(), 3, "source document is unchanged");

        let filtered = remove_short_sentences(&document, 4);
        assert_eq!(filtered.text(), "    The quick fox jumps.");
    }

    #[test]
    fn test_remove_short_sentences_shares_nodes() {
        let document = parse("\tKeep this sentence please.").unwrap();
        let filtered = remove_short_sentences(&document, 1);

        let original = &document.paragraphs().next().unwrap().children()[0];
        let shared = &filtered.paragraphs().next().unwrap().children()[0];
        assert!(Arc::ptr_eq(original, shared));
    }
}
