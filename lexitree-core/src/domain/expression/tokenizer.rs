//! Regex scan of arithmetic text into tokens

use super::error::EvalError;
use crate::domain::error::ConfigError;
use regex::Regex;

/// One lexical element of an arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// A run of operator characters; only single `+ - * /` are arithmetic
    Operator(String),
    Open,
    Close,
}

/// Tokens in input order, plus how many characters the scan skipped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub dropped: usize,
}

/// Left-to-right scanner for numbers, operator runs and parentheses
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new(operators: &str) -> Result<Self, ConfigError> {
        let pattern = format!(r"(\d+(?:\.\d+)?)|([{operators}]+)|([()])");
        let pattern = Regex::new(&pattern).map_err(|source| ConfigError::Pattern {
            what: "expression token",
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Scan `text`. Characters outside every token class are skipped and
    /// counted, whitespace excluded.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream, EvalError> {
        let mut stream = TokenStream::default();
        let mut last_end = 0;

        for captures in self.pattern.captures_iter(text) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            stream.dropped += count_skipped(&text[last_end..whole.start()]);
            last_end = whole.end();

            let token = if let Some(number) = captures.get(1) {
                let literal = number.as_str();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
                Token::Number(value)
            } else if let Some(operator) = captures.get(2) {
                Token::Operator(operator.as_str().to_string())
            } else if whole.as_str() == "(" {
                Token::Open
            } else {
                Token::Close
            };
            stream.tokens.push(token);
        }
        stream.dropped += count_skipped(&text[last_end..]);

        Ok(stream)
    }
}

fn count_skipped(gap: &str) -> usize {
    gap.chars().filter(|ch| !ch.is_whitespace()).count()
}
