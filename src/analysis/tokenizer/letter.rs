//! Lossy ASCII-letter tokenizer.
//!
//! This is the only tokenizer used for matrix generation, and it is crude by
//! contract: every character that is not an ASCII letter or a space is
//! replaced with a space before lowercasing and splitting on whitespace.
//! Digits, punctuation, and accented letters are destroyed, not preserved,
//! so `"don't"` tokenizes to `don` and `t`.
//!
//! # Examples
//!
//! ```
//! use termite::analysis::token::Token;
//! use termite::analysis::tokenizer::Tokenizer;
//! use termite::analysis::tokenizer::letter::LetterTokenizer;
//!
//! let tokenizer = LetterTokenizer::new().unwrap();
//! let tokens: Vec<Token> = tokenizer.tokenize("Don't panic!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "don");
//! assert_eq!(tokens[1].text, "t");
//! assert_eq!(tokens[2].text, "panic");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TermiteError};

/// Pattern matching every character that is destroyed during tokenization.
const NON_LETTER_PATTERN: &str = "[^A-Za-z ]";

/// A tokenizer that keeps only ASCII letters.
///
/// Non-letter characters become token boundaries, the text is lowercased,
/// and empty tokens are discarded.
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    /// The compiled non-letter pattern.
    pattern: Arc<Regex>,
}

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(NON_LETTER_PATTERN)
            .map_err(|e| TermiteError::analysis(format!("invalid tokenizer pattern: {e}")))?;

        Ok(LetterTokenizer {
            pattern: Arc::new(regex),
        })
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let cleaned = self.pattern.replace_all(text, " ").to_ascii_lowercase();

        let tokens: Vec<Token> = cleaned
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        let tokenizer = LetterTokenizer::new().unwrap();
        tokenizer
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_letter_tokenizer() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_apostrophe_splits_token() {
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_digits_and_punctuation_destroyed() {
        assert_eq!(tokenize("room 101, 2nd floor!"), vec!["room", "nd", "floor"]);
        assert_eq!(tokenize("42"), Vec::<String>::new());
    }

    #[test]
    fn test_non_ascii_destroyed() {
        assert_eq!(tokenize("café"), vec!["caf"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \t  "), Vec::<String>::new());
    }

    #[test]
    fn test_positions() {
        let tokenizer = LetterTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("one two three").unwrap().collect();

        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(LetterTokenizer::new().unwrap().name(), "letter");
    }
}
