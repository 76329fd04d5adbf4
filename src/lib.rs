//! # Termite
//!
//! A term-document matrix generator for plain-text corpora.
//!
//! Termite tokenizes a batch of documents with a deliberately lossy
//! ASCII-letter tokenizer, removes common English stop words, reduces the
//! surviving words to Porter stems, and aggregates per-document stem counts
//! into two CSV matrices: raw term frequency and tf-idf.
//!
//! ## Features
//!
//! - Flexible text analysis pipeline (tokenizer + filter chain)
//! - Embedded English stop-word list
//! - Canonical Porter stemming
//! - Deterministic first-seen vocabulary ordering
//! - Raw term-frequency and tf-idf CSV output
//!
//! ## Example
//!
//! ```
//! use termite::corpus::Corpus;
//! use termite::index::DocumentIndexer;
//!
//! let indexer = DocumentIndexer::new().unwrap();
//!
//! let mut corpus = Corpus::new();
//! corpus.push(indexer.index_text("doc1", "the cat sat").unwrap());
//! corpus.push(indexer.index_text("doc2", "the cat ran fast").unwrap());
//!
//! assert_eq!(corpus.vocabulary(), vec!["cat", "sat", "ran", "fast"]);
//! assert_eq!(corpus.document_frequency("cat"), 2);
//! ```

pub mod analysis;
pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod matrix;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
