//! Compiled language rules shared by every pipeline stage

use super::config::{get_language_config, LanguageConfig};
use crate::domain::error::ConfigError;
use crate::domain::expression::Evaluator;
use regex::Regex;

/// A word optionally wrapped in one bracket/quote layer, with trailing
/// punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosedWord<'a> {
    pub open: Option<&'a str>,
    pub word: &'a str,
    pub close: Option<&'a str>,
    pub trailing: Option<&'a str>,
}

/// Character classes and patterns compiled from a [`LanguageConfig`]
#[derive(Debug, Clone)]
pub struct Grammar {
    code: String,
    name: String,
    letter: Regex,
    vowels: Vec<char>,
    punctuation: Vec<char>,
    enclosures: Vec<char>,
    operators: Vec<char>,
    terminators: Vec<char>,
    ellipsis: String,
    indent_markers: Vec<String>,
    require_indent: bool,
    word: Regex,
    word_with_punctuation: Regex,
    enclosed_word: Option<Regex>,
    paragraph_break: Regex,
    sentence_break: Regex,
    evaluator: Evaluator,
}

fn compile(what: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::Pattern { what, source })
}

fn class_of(chars: &[char]) -> String {
    chars.iter().map(|ch| regex::escape(&ch.to_string())).collect()
}

impl Grammar {
    /// Validate `config` and compile its patterns
    pub fn from_config(config: &LanguageConfig) -> Result<Self, ConfigError> {
        validate(config)?;

        let letters: String = config
            .scripts
            .iter()
            .map(|script| script.letters.as_str())
            .collect();
        let vowels = config
            .scripts
            .iter()
            .flat_map(|script| script.vowels.chars())
            .collect();

        let lexicon = &config.lexicon;
        let mut enclosures: Vec<char> = lexicon
            .brackets
            .iter()
            .flat_map(|pair| [pair.open, pair.close])
            .collect();
        enclosures.extend(lexicon.quotes.iter().copied());
        enclosures.dedup();

        let word_letters = if lexicon.word_allows_digits {
            format!("{letters}0-9_")
        } else {
            letters.clone()
        };
        let word_shape = if lexicon.word_joiners.is_empty() {
            format!("[{word_letters}]+")
        } else {
            format!(
                "[{word_letters}]+(?:[{}][{word_letters}]+)*",
                class_of(&lexicon.word_joiners)
            )
        };
        let punctuation_class = class_of(&lexicon.punctuation);

        let enclosed_word = if enclosures.is_empty() {
            None
        } else {
            let enclosure_class = class_of(&enclosures);
            Some(compile(
                "enclosed word",
                &format!(
                    "^([{enclosure_class}])?({word_shape})([{enclosure_class}])?([{punctuation_class}])?$"
                ),
            )?)
        };

        let ellipsis = config.sentence.ellipsis.clone();
        let terminators = config.sentence.terminators.clone();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            letter: compile("letter", &format!("^[{letters}]$"))?,
            vowels,
            punctuation: lexicon.punctuation.clone(),
            enclosures,
            operators: config.expression.operators.clone(),
            require_indent: config.paragraph.require_indent,
            indent_markers: config.paragraph.indent_markers.clone(),
            word: compile("word", &format!("^{word_shape}$"))?,
            word_with_punctuation: compile(
                "word with punctuation",
                &format!("^({word_shape})([{punctuation_class}])$"),
            )?,
            enclosed_word,
            paragraph_break: compile("paragraph break", r"\r?\n\s*\n")?,
            sentence_break: compile(
                "sentence break",
                &format!(
                    r"(?:{}|[{}])(\s+)",
                    regex::escape(&ellipsis),
                    class_of(&terminators)
                ),
            )?,
            evaluator: Evaluator::with_operators(&config.expression.operators)?,
            ellipsis,
            terminators,
        })
    }

    /// Grammar of an embedded language
    pub fn for_language(code: &str) -> Result<Self, ConfigError> {
        Self::from_config(get_language_config(code)?)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The multi-character ellipsis literal
    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    /// Evaluator configured with this language's operator characters
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    // Character classes

    pub fn is_letter(&self, ch: char) -> bool {
        let mut buf = [0; 4];
        self.letter.is_match(ch.encode_utf8(&mut buf))
    }

    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&ch)
    }

    pub fn is_consonant(&self, ch: char) -> bool {
        self.is_letter(ch) && !self.is_vowel(ch)
    }

    pub fn is_digit(&self, ch: char) -> bool {
        ch.is_ascii_digit()
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(&ch) || self.terminators.contains(&ch)
    }

    pub fn is_operator(&self, ch: char) -> bool {
        self.operators.contains(&ch)
    }

    /// Bracket or quote character
    pub fn is_enclosure(&self, ch: char) -> bool {
        self.enclosures.contains(&ch)
    }

    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Whether the symbol stage can keep `ch` as a symbol
    pub fn is_symbol_char(&self, ch: char) -> bool {
        self.is_letter(ch)
            || self.is_digit(ch)
            || self.is_punctuation(ch)
            || self.is_operator(ch)
            || self.is_enclosure(ch)
    }

    // Word shapes

    pub fn is_word(&self, text: &str) -> bool {
        self.word.is_match(text)
    }

    /// `word` followed by exactly one punctuation character
    pub fn match_word_with_punctuation<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self.word_with_punctuation.captures(text)?;
        Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
    }

    /// Optional opening enclosure, word, optional closing enclosure and
    /// optional trailing punctuation. Pairs are not required to match.
    pub fn match_enclosed_word<'a>(&self, text: &'a str) -> Option<EnclosedWord<'a>> {
        let captures = self.enclosed_word.as_ref()?.captures(text)?;
        Some(EnclosedWord {
            open: captures.get(1).map(|m| m.as_str()),
            word: captures.get(2)?.as_str(),
            close: captures.get(3).map(|m| m.as_str()),
            trailing: captures.get(4).map(|m| m.as_str()),
        })
    }

    // Splitting

    /// Blank-line separated paragraph candidates, indent kept, whitespace-only
    /// pieces discarded
    pub fn split_paragraphs<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.paragraph_break
            .split(text)
            .map(|piece| piece.trim_start_matches(&['\r', '\n'][..]).trim_end())
            .filter(|piece| !piece.trim().is_empty())
            .collect()
    }

    /// Body of a paragraph candidate without its indent marker, or `None`
    /// when it does not start with one
    pub fn strip_indent<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        self.indent_markers
            .iter()
            .find_map(|marker| candidate.strip_prefix(marker.as_str()))
            .map(str::trim)
    }

    /// Whether unindented paragraph candidates are rejected
    pub fn require_indent(&self) -> bool {
        self.require_indent
    }

    /// Split after every terminator (or ellipsis) that is followed by
    /// whitespace. Pieces are trimmed and empty ones skipped.
    pub fn split_sentences<'a>(&self, body: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for captures in self.sentence_break.captures_iter(body) {
            let Some(space) = captures.get(1) else {
                continue;
            };
            sentences.push(body[start..space.start()].trim());
            start = space.end();
        }
        sentences.push(body[start..].trim());

        sentences.retain(|sentence| !sentence.is_empty());
        sentences
    }

    /// Split a sentence into its body and terminator. A trailing ellipsis
    /// is one terminator.
    pub fn split_terminator<'a>(&self, sentence: &'a str) -> Option<(&'a str, &'a str)> {
        if let Some(body) = sentence.strip_suffix(self.ellipsis.as_str()) {
            return Some((body.trim_end(), &sentence[body.len()..]));
        }

        let last = sentence.chars().next_back()?;
        if !self.is_terminator(last) {
            return None;
        }
        let split = sentence.len() - last.len_utf8();
        Some((sentence[..split].trim_end(), &sentence[split..]))
    }

    /// Uppercase letter of this grammar's scripts at the start of `text`
    pub fn starts_sentence(&self, text: &str) -> bool {
        text.chars()
            .next()
            .is_some_and(|ch| ch.is_uppercase() && self.is_letter(ch))
    }
}

impl Default for Grammar {
    /// English
    fn default() -> Self {
        Self::for_language("en").expect("embedded English grammar is valid")
    }
}

fn validate(config: &LanguageConfig) -> Result<(), ConfigError> {
    let invalid = |message: &str| Err(ConfigError::Invalid(message.to_string()));

    if config.scripts.is_empty() {
        return invalid("at least one script is required");
    }
    if config.scripts.iter().any(|script| script.letters.is_empty()) {
        return invalid("script letters must not be empty");
    }
    if config.sentence.terminators.is_empty() {
        return invalid("sentence terminators must not be empty");
    }
    if config.sentence.ellipsis.is_empty() {
        return invalid("ellipsis must not be empty");
    }
    if config.lexicon.punctuation.is_empty() {
        return invalid("punctuation must not be empty");
    }
    if config.paragraph.indent_markers.iter().any(String::is_empty) {
        return invalid("indent markers must not be empty strings");
    }
    if config.paragraph.require_indent && config.paragraph.indent_markers.is_empty() {
        return invalid("require_indent needs at least one indent marker");
    }
    Ok(())
}
