//! Token filters applied after tokenization.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod stem;
pub mod stop;

pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;

/// Trait for filters that transform a token stream.
pub trait Filter: Send + Sync {
    /// Filter the given token stream, producing a new one.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
