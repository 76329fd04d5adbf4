//! Corpus aggregation and tf-idf arithmetic.
//!
//! A [`Corpus`] is an ordered collection of [`Document`]s (insertion order
//! is input order). It derives the vocabulary and document frequencies from
//! its documents and computes tf-idf per (document, term) pair:
//!
//! ```text
//! tfidf(doc, term) = tf(doc, term) * ln(|corpus| / df(term))
//! ```
//!
//! A term with `tf == 0` always scores 0.0, and a term with `tf > 0`
//! guarantees `df >= 1`, so the logarithm's argument is never a division
//! by zero.
//!
//! # Examples
//!
//! ```
//! use termite::corpus::Corpus;
//! use termite::document::Document;
//!
//! let mut doc1 = Document::new("doc1");
//! doc1.increment_term("cat");
//! let mut doc2 = Document::new("doc2");
//! doc2.increment_term("cat");
//! doc2.increment_term("ran");
//!
//! let mut corpus = Corpus::new();
//! corpus.push(doc1);
//! corpus.push(doc2);
//!
//! assert_eq!(corpus.vocabulary(), vec!["cat", "ran"]);
//! assert_eq!(corpus.document_frequency("cat"), 2);
//! assert_eq!(corpus.tf_idf(corpus.get(0).unwrap(), "cat"), 0.0);
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// An ordered collection of documents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// Documents in input order.
    documents: Vec<Document>,
}

impl Corpus {
    /// Create a new, empty corpus.
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Append a document. Input order is preserved.
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Get the number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get the documents in input order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Get a document by position.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Collect the distinct terms across all documents.
    ///
    /// Order is deterministic: first-seen order across documents in corpus
    /// order, not sorted. This fixes the row order of the output matrix.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut vocabulary = Vec::new();

        for document in &self.documents {
            for term in document.terms() {
                if seen.insert(term) {
                    vocabulary.push(term.to_string());
                }
            }
        }

        vocabulary
    }

    /// Count the documents containing at least one occurrence of a term.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.documents
            .iter()
            .filter(|d| d.contains_term(term))
            .count()
    }

    /// Compute the tf-idf weight of a term within a document.
    ///
    /// Returns 0.0 when the term does not occur in the document; otherwise
    /// the raw count scaled by the natural log of (corpus size / document
    /// frequency). The document is expected to be a member of this corpus.
    pub fn tf_idf(&self, document: &Document, term: &str) -> f64 {
        let tf = document.term_frequency(term);
        if tf == 0 {
            return 0.0;
        }

        let idf = (self.len() as f64 / self.document_frequency(term) as f64).ln();
        tf as f64 * idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(name: &str, terms: &[&str]) -> Document {
        let mut doc = Document::new(name);
        for term in terms {
            doc.increment_term(*term);
        }
        doc
    }

    fn two_document_corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.push(document("doc1", &["cat", "sat"]));
        corpus.push(document("doc2", &["cat", "ran", "fast"]));
        corpus
    }

    #[test]
    fn test_vocabulary_first_seen_order() {
        let corpus = two_document_corpus();
        assert_eq!(corpus.vocabulary(), vec!["cat", "sat", "ran", "fast"]);
    }

    #[test]
    fn test_document_frequency_bounds() {
        let corpus = two_document_corpus();

        for term in corpus.vocabulary() {
            let df = corpus.document_frequency(&term);
            assert!(df >= 1, "vocabulary term {term} has df 0");
            assert!(df <= corpus.len());
        }

        assert_eq!(corpus.document_frequency("cat"), 2);
        assert_eq!(corpus.document_frequency("sat"), 1);
        assert_eq!(corpus.document_frequency("missing"), 0);
    }

    #[test]
    fn test_tf_idf_zero_when_absent() {
        let corpus = two_document_corpus();
        let doc1 = corpus.get(0).unwrap();

        assert_eq!(corpus.tf_idf(doc1, "ran"), 0.0);
        assert_eq!(corpus.tf_idf(doc1, "missing"), 0.0);
    }

    #[test]
    fn test_tf_idf_values() {
        let corpus = two_document_corpus();
        let doc1 = corpus.get(0).unwrap();
        let doc2 = corpus.get(1).unwrap();

        // "cat" occurs everywhere: ln(2/2) == 0
        assert_eq!(corpus.tf_idf(doc1, "cat"), 0.0);
        assert_eq!(corpus.tf_idf(doc2, "cat"), 0.0);

        // "sat" occurs only in doc1: 1 * ln(2/1)
        let expected = 2.0_f64.ln();
        assert_eq!(corpus.tf_idf(doc1, "sat"), expected);
        assert_eq!(corpus.tf_idf(doc2, "sat"), 0.0);
    }

    #[test]
    fn test_repeated_term_scales_tf() {
        let mut corpus = Corpus::new();
        corpus.push(document("doc1", &["cat", "cat", "cat"]));
        corpus.push(document("doc2", &["dog"]));

        let doc1 = corpus.get(0).unwrap();
        assert_eq!(corpus.tf_idf(doc1, "cat"), 3.0 * 2.0_f64.ln());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert!(corpus.vocabulary().is_empty());
    }
}
