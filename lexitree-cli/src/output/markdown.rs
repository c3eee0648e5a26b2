//! Markdown output formatter

use super::{plural, OutputFormatter};
use anyhow::Result;
use lexitree_core::operations::AnalysisReport;
use lexitree_core::ParseOutput;
use std::io::Write;

/// Markdown formatter - outputs sentences as a numbered list, reports as
/// sections and tables
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

/// Escape table cell separators
fn cell(text: &str) -> String {
    text.trim().replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &ParseOutput) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for (position, paragraph) in output.document.paragraphs().enumerate() {
            if position > 0 {
                writeln!(self.writer)?;
            }
            for sentence in paragraph.sentences() {
                self.sentence_count += 1;
                writeln!(self.writer, "{}. {}", self.sentence_count, sentence.text())?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_report(&mut self, source: &str, report: &AnalysisReport) -> Result<()> {
        let w = &mut self.writer;
        let stats = &report.statistics;
        self.sentence_count += stats.sentences;

        writeln!(w, "# Analysis of {source}")?;
        writeln!(w)?;
        writeln!(
            w,
            "Language `{}`: {}, {}, {}.",
            report.language,
            plural(stats.paragraphs, "paragraph"),
            plural(stats.sentences, "sentence"),
            plural(stats.words, "word")
        )?;

        writeln!(w)?;
        writeln!(w, "## Paragraphs by sentence count")?;
        writeln!(w)?;
        writeln!(w, "| # | Sentences | Text |")?;
        writeln!(w, "|---|-----------|------|")?;
        for paragraph in &report.paragraphs_by_sentence_count {
            writeln!(
                w,
                "| {} | {} | {} |",
                paragraph.position + 1,
                paragraph.sentences,
                cell(&paragraph.text)
            )?;
        }

        writeln!(w)?;
        writeln!(w, "## Longest word")?;
        writeln!(w)?;
        match report.longest_word_length {
            Some(length) => {
                writeln!(w, "{} long, found in:", plural(length, "character"))?;
                writeln!(w)?;
                for sentence in &report.sentences_with_longest_word {
                    writeln!(w, "- {sentence}")?;
                }
            }
            None => writeln!(w, "*No words found*")?,
        }

        writeln!(w)?;
        writeln!(
            w,
            "## Sentences with at least {}",
            plural(report.min_words, "word")
        )?;
        writeln!(w)?;
        for line in report.filtered_text.lines().filter(|line| !line.is_empty()) {
            writeln!(w, "> {}", line.trim())?;
        }

        writeln!(w)?;
        writeln!(w, "## Word frequency")?;
        writeln!(w)?;
        writeln!(w, "| Word | Count | Duplicate |")?;
        writeln!(w, "|------|-------|-----------|")?;
        for entry in &report.top_words {
            let duplicate = if report.duplicate_words.contains_key(&entry.word) {
                "yes"
            } else {
                "no"
            };
            writeln!(w, "| {} | {} | {duplicate} |", cell(&entry.word), entry.count)?;
        }

        writeln!(w)?;
        writeln!(w, "## Vowels and consonants")?;
        writeln!(w)?;
        writeln!(w, "| Sentence | Vowels | Consonants |")?;
        writeln!(w, "|----------|--------|------------|")?;
        for sentence in &report.letters {
            writeln!(
                w,
                "| {} | {} | {} |",
                cell(&sentence.text),
                sentence.counts.vowels,
                sentence.counts.consonants
            )?;
        }
        writeln!(
            w,
            "| **Total** | {} | {} |",
            report.letter_summary.vowels, report.letter_summary.consonants
        )?;
        writeln!(w)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
