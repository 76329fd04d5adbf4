//! Tokenizer trait and implementations.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod letter;

pub use letter::LetterTokenizer;

/// Trait for tokenizers that split text into a stream of tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a token stream.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}
