//! Document indexing: text in, per-document term counts out.
//!
//! The [`DocumentIndexer`] runs each line of a document through an analysis
//! pipeline and counts the surviving stems. Batch indexing is best-effort:
//! an unreadable document is logged and skipped, and the run continues with
//! the remaining documents.
//!
//! # Examples
//!
//! ```
//! use termite::index::DocumentIndexer;
//!
//! let indexer = DocumentIndexer::new().unwrap();
//! let doc = indexer.index_text("doc1", "The cat sat.\nThe cat ran!").unwrap();
//!
//! assert_eq!(doc.term_frequency("cat"), 2);
//! assert_eq!(doc.term_frequency("the"), 0); // stop word
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::corpus::Corpus;
use crate::document::Document;
use crate::error::{Result, TermiteError};

/// Indexes documents through an analysis pipeline.
pub struct DocumentIndexer {
    analyzer: Arc<dyn Analyzer>,
}

impl DocumentIndexer {
    /// Create an indexer with the standard pipeline (letter tokenizer,
    /// stop-word removal, Porter stemming).
    pub fn new() -> Result<Self> {
        Ok(DocumentIndexer {
            analyzer: Arc::new(PipelineAnalyzer::standard()?),
        })
    }

    /// Create an indexer with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        DocumentIndexer { analyzer }
    }

    /// Analyze one line and add the surviving stems to the document.
    fn index_line(&self, document: &mut Document, line: &str) -> Result<()> {
        for token in self.analyzer.analyze(line)? {
            if !token.is_stopped() && !token.is_empty() {
                document.increment_term(token.text);
            }
        }
        Ok(())
    }

    /// Index a sequence of text lines as one document.
    ///
    /// An empty sequence yields an empty term map, not an error.
    pub fn index_lines<I, S>(&self, name: &str, lines: I) -> Result<Document>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut document = Document::new(name);
        for line in lines {
            self.index_line(&mut document, line.as_ref())?;
        }
        Ok(document)
    }

    /// Index a text blob as one document, splitting on line breaks.
    pub fn index_text(&self, name: &str, text: &str) -> Result<Document> {
        self.index_lines(name, text.lines())
    }

    /// Index a buffered reader as one document.
    pub fn index_reader<R: BufRead>(&self, name: &str, reader: R) -> Result<Document> {
        let mut document = Document::new(name);
        for line in reader.lines() {
            self.index_line(&mut document, &line?)?;
        }
        Ok(document)
    }

    /// Index the file at `path` as one document.
    ///
    /// The document is named after the file, with a `.txt` suffix stripped.
    /// Open and read failures map to a recoverable [`TermiteError::Read`].
    pub fn index_path<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TermiteError::read(path, e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mut document = Document::from_file_name(&file_name);

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| TermiteError::read(path, e))?;
            self.index_line(&mut document, &line)?;
        }

        Ok(document)
    }

    /// Index a batch of paths into a corpus, best-effort.
    ///
    /// Unreadable documents are logged and skipped; the corpus preserves the
    /// input order of the documents that survive.
    pub fn index_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Corpus {
        let mut corpus = Corpus::new();
        for path in paths {
            match self.index_path(path) {
                Ok(document) => corpus.push(document),
                Err(e) => {
                    tracing::warn!(
                        path = %path.as_ref().display(),
                        error = %e,
                        "skipping unreadable document"
                    );
                }
            }
        }
        corpus
    }

    /// Parallel variant of [`index_paths`](Self::index_paths).
    ///
    /// Only the per-document map stage runs in parallel; aggregation is
    /// serial and the result is identical, including document order.
    pub fn par_index_paths<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Corpus {
        let results: Vec<Result<Document>> =
            paths.par_iter().map(|path| self.index_path(path)).collect();

        let mut corpus = Corpus::new();
        for (path, result) in paths.iter().zip(results) {
            match result {
                Ok(document) => corpus.push(document),
                Err(e) => {
                    tracing::warn!(
                        path = %path.as_ref().display(),
                        error = %e,
                        "skipping unreadable document"
                    );
                }
            }
        }
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_text_counts_stems() {
        let indexer = DocumentIndexer::new().unwrap();
        let doc = indexer
            .index_text("doc1", "The cats sat.\nThe cats were running fast!")
            .unwrap();

        assert_eq!(doc.name(), "doc1");
        assert_eq!(doc.term_frequency("cat"), 2);
        assert_eq!(doc.term_frequency("sat"), 1);
        assert_eq!(doc.term_frequency("run"), 1);
        assert_eq!(doc.term_frequency("fast"), 1);
        // Stop words never reach the term map
        assert_eq!(doc.term_frequency("the"), 0);
        assert_eq!(doc.term_frequency("were"), 0);
    }

    #[test]
    fn test_empty_document_is_not_an_error() {
        let indexer = DocumentIndexer::new().unwrap();
        let doc = indexer.index_text("empty", "").unwrap();
        assert!(doc.is_empty());

        // All stop words also yields an empty map
        let doc = indexer.index_text("stops", "the and or but").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_index_lines() {
        let indexer = DocumentIndexer::new().unwrap();
        let doc = indexer
            .index_lines("doc1", ["the cat", "a cat", "don't"])
            .unwrap();

        assert_eq!(doc.term_frequency("cat"), 2);
        // The lossy tokenizer splits "don't" into "don" and "t"
        assert_eq!(doc.term_frequency("don"), 1);
        assert_eq!(doc.term_frequency("t"), 1);
    }

    #[test]
    fn test_index_reader() {
        let indexer = DocumentIndexer::new().unwrap();
        let doc = indexer
            .index_reader("doc1", "the cat sat\n".as_bytes())
            .unwrap();

        assert_eq!(doc.term_frequency("cat"), 1);
        assert_eq!(doc.term_frequency("sat"), 1);
    }

    #[test]
    fn test_missing_path_is_read_error() {
        let indexer = DocumentIndexer::new().unwrap();
        let result = indexer.index_path("/nonexistent/doc1.txt");

        match result {
            Err(e) => assert!(e.is_recoverable()),
            Ok(_) => panic!("expected a read error"),
        }
    }

    #[test]
    fn test_index_paths_skips_missing() {
        let indexer = DocumentIndexer::new().unwrap();
        let corpus = indexer.index_paths(&["/nonexistent/a.txt", "/nonexistent/b.txt"]);
        assert!(corpus.is_empty());
    }
}
