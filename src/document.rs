//! Per-document term frequency mapping.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A parsed document: a name plus a mapping from stem to occurrence count.
///
/// Zero-count entries are never stored; absence means zero. Terms remember
/// their first-seen order so the corpus vocabulary stays deterministic.
/// Documents are built once by the indexer and not mutated afterwards.
///
/// # Examples
///
/// ```
/// use termite::document::Document;
///
/// let mut doc = Document::new("doc1");
/// doc.increment_term("cat");
/// doc.increment_term("cat");
/// doc.increment_term("sat");
///
/// assert_eq!(doc.term_frequency("cat"), 2);
/// assert_eq!(doc.term_frequency("dog"), 0);
/// assert_eq!(doc.terms().collect::<Vec<_>>(), vec!["cat", "sat"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the document, without the .txt extension.
    name: String,
    /// Map of terms to occurrence counts.
    counts: AHashMap<String, u64>,
    /// Terms in first-seen order.
    terms: Vec<String>,
}

impl Document {
    /// Create a new, empty document with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Document {
            name: name.into(),
            counts: AHashMap::new(),
            terms: Vec::new(),
        }
    }

    /// Create a document named after a source file, stripping a `.txt`
    /// suffix when present.
    pub fn from_file_name(file_name: &str) -> Self {
        let name = file_name.strip_suffix(".txt").unwrap_or(file_name);
        Self::new(name)
    }

    /// Get the document name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record one occurrence of a term.
    pub fn increment_term<S: Into<String>>(&mut self, term: S) {
        let term = term.into();
        match self.counts.get_mut(&term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.clone(), 1);
                self.terms.push(term);
            }
        }
    }

    /// Get the number of occurrences of a term, or 0 when absent.
    pub fn term_frequency(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Check whether the term occurs in this document.
    pub fn contains_term(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Iterate over the document's terms in first-seen order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|s| s.as_str())
    }

    /// Get the number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.counts.len()
    }

    /// Check if the document has no terms.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting() {
        let mut doc = Document::new("doc1");
        doc.increment_term("cat");
        doc.increment_term("sat");
        doc.increment_term("cat");

        assert_eq!(doc.name(), "doc1");
        assert_eq!(doc.term_frequency("cat"), 2);
        assert_eq!(doc.term_frequency("sat"), 1);
        assert_eq!(doc.term_count(), 2);
        assert!(doc.contains_term("cat"));
    }

    #[test]
    fn test_absent_term_is_zero() {
        let doc = Document::new("empty");
        assert_eq!(doc.term_frequency("anything"), 0);
        assert!(!doc.contains_term("anything"));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_terms_in_first_seen_order() {
        let mut doc = Document::new("doc1");
        for term in ["zebra", "apple", "zebra", "mango", "apple"] {
            doc.increment_term(term);
        }

        let terms: Vec<&str> = doc.terms().collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_from_file_name_strips_txt() {
        assert_eq!(Document::from_file_name("Doc1.txt").name(), "Doc1");
        assert_eq!(Document::from_file_name("notes.md").name(), "notes.md");
        assert_eq!(Document::from_file_name("Doc1").name(), "Doc1");
    }
}
