//! Analytical operations over parsed documents

use lexitree_core::operations::{
    analyze, count_identical_words, count_vowels_consonants, duplicate_words,
    find_sentences_with_longest_word, remove_short_sentences, sort_paragraphs_by_sentence_count,
    LetterCount,
};
use lexitree_core::TextParser;

const SAMPLE: &str = "\tThe cat sat. The dog ran far away. The end!\n\n\
                      \tOnly one sentence here.\n\n\
                      \tTwo here. And two there.";

#[test]
fn test_sort_paragraphs_by_sentence_count() {
    let document = TextParser::new().parse(SAMPLE).unwrap();
    let counts: Vec<usize> = sort_paragraphs_by_sentence_count(&document)
        .iter()
        .map(|paragraph| paragraph.sentence_count())
        .collect();
    assert_eq!(counts, vec![1, 2, 3]);
}

#[test]
fn test_sentences_with_longest_word() {
    let document = TextParser::new().parse(SAMPLE).unwrap();
    let sentences: Vec<String> = find_sentences_with_longest_word(&document)
        .iter()
        .map(|sentence| sentence.text())
        .collect();
    assert_eq!(sentences, vec!["Only one sentence here."]);
}

#[test]
fn test_remove_short_sentences() {
    let document = TextParser::new().parse(SAMPLE).unwrap();

    let filtered = remove_short_sentences(&document, 3);
    assert_eq!(filtered.sentence_count(), 4);
    assert_eq!(filtered.paragraph_count(), 3);

    let filtered = remove_short_sentences(&document, 4);
    assert_eq!(filtered.paragraph_count(), 2);
    assert_eq!(
        filtered.text(),
        "    The dog ran far away.\n\n    Only one sentence here."
    );

    let filtered = remove_short_sentences(&document, 100);
    assert_eq!(filtered.paragraph_count(), 0);
    assert_eq!(filtered.text(), "");
}

#[test]
fn test_duplicate_words_are_case_folded() {
    let document = TextParser::new().parse(SAMPLE).unwrap();
    let duplicates = duplicate_words(&document);
    assert_eq!(duplicates.get("the"), Some(&3));
    assert_eq!(duplicates.get("two"), Some(&2));
    assert_eq!(duplicates.get("here"), Some(&2));
    assert!(duplicates.values().all(|count| *count > 1));

    let all = count_identical_words(&document);
    assert_eq!(all.values().sum::<usize>(), document.word_count());
}

#[test]
fn test_vowels_and_consonants() {
    let parser = TextParser::new();
    let document = parser.parse("\tThe cat sat.").unwrap();
    let counts = count_vowels_consonants(&document, parser.grammar());
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].counts, LetterCount { vowels: 3, consonants: 6 });
}

#[test]
fn test_analysis_report() {
    let parser = TextParser::new();
    let document = parser.parse(SAMPLE).unwrap();
    let report = analyze(&document, parser.grammar(), 3);

    assert_eq!(report.statistics.sentences, 6);
    assert_eq!(report.paragraphs_by_sentence_count[0].position, 1);
    assert_eq!(report.after_short_sentence_removal.sentences, 4);
    assert_eq!(report.letters.len(), 6);
    assert_eq!(
        report.letter_summary.total(),
        report.letters.iter().map(|s| s.counts.total()).sum::<usize>()
    );
}
