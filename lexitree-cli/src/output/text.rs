//! Plain text output formatter

use super::{plural, OutputFormatter};
use anyhow::Result;
use lexitree_core::operations::AnalysisReport;
use lexitree_core::ParseOutput;
use std::io::Write;

/// Plain text formatter - outputs the normalized document text
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Blank line between consecutive inputs
    fn separate(&mut self) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.written += 1;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &ParseOutput) -> Result<()> {
        self.separate()?;
        writeln!(self.writer, "{}", output.document.text())?;
        Ok(())
    }

    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()> {
        self.separate()?;
        let w = &mut self.writer;
        let stats = &report.statistics;

        writeln!(w, "Report for {source} ({})", report.language)?;
        writeln!(
            w,
            "{}, {}, {}",
            plural(stats.paragraphs, "paragraph"),
            plural(stats.sentences, "sentence"),
            plural(stats.words, "word")
        )?;

        writeln!(w)?;
        writeln!(w, "Paragraphs by sentence count:")?;
        for paragraph in &report.paragraphs_by_sentence_count {
            writeln!(
                w,
                "  #{} ({}): {}",
                paragraph.position + 1,
                plural(paragraph.sentences, "sentence"),
                paragraph.text.trim_start()
            )?;
        }

        writeln!(w)?;
        match report.longest_word_length {
            Some(length) => {
                writeln!(w, "Sentences with the longest word ({length} characters):")?;
                for sentence in &report.sentences_with_longest_word {
                    writeln!(w, "  {sentence}")?;
                }
            }
            None => writeln!(w, "No words found")?,
        }

        writeln!(w)?;
        let kept = &report.after_short_sentence_removal;
        writeln!(
            w,
            "Without sentences under {}: {} in {}",
            plural(report.min_words, "word"),
            plural(kept.sentences, "sentence"),
            plural(kept.paragraphs, "paragraph")
        )?;
        for line in report.filtered_text.lines().filter(|line| !line.is_empty()) {
            writeln!(w, "  {}", line.trim_start())?;
        }

        writeln!(w)?;
        writeln!(w, "Duplicate words:")?;
        if report.duplicate_words.is_empty() {
            writeln!(w, "  (none)")?;
        }
        for (word, count) in &report.duplicate_words {
            writeln!(w, "  {word}: {count}")?;
        }

        writeln!(w)?;
        writeln!(w, "Most frequent words:")?;
        for entry in &report.top_words {
            writeln!(w, "  {}: {}", entry.word, entry.count)?;
        }

        writeln!(w)?;
        writeln!(w, "Vowels and consonants:")?;
        for sentence in &report.letters {
            writeln!(
                w,
                "  {}/{} {}",
                sentence.counts.vowels, sentence.counts.consonants, sentence.text
            )?;
        }
        writeln!(
            w,
            "  total: {}, {}",
            plural(report.letter_summary.vowels, "vowel"),
            plural(report.letter_summary.consonants, "consonant")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
