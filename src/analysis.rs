//! Text analysis pipeline: tokenization, stop-word removal, and stemming.
//!
//! The pipeline mirrors the indexing flow: raw text is split into tokens by
//! a [`tokenizer::Tokenizer`], then passed through a chain of
//! [`token_filter::Filter`]s. The [`analyzer`] module composes the two into
//! a reusable [`analyzer::Analyzer`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
