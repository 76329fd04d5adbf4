//! Term-document matrix CSV output.
//!
//! Matrices are term-major: the first row holds a blank cell followed by
//! one document name per column, and each following row holds a term
//! followed by one value per document. Every cell is followed by a comma
//! (the trailing comma is part of the format) and rows end with a newline.
//!
//! Two variants are produced per run: raw term frequency, written as
//! integers, and tf-idf, written with the default floating-point
//! representation and no rounding.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::corpus::Corpus;
use crate::document::Document;
use crate::error::{Result, TermiteError};

/// The two cell value variants of the output matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixVariant {
    /// Raw term frequency counts.
    TermFrequency,
    /// Term frequency scaled by inverse document frequency.
    TfIdf,
}

impl MatrixVariant {
    fn cell(&self, corpus: &Corpus, document: &Document, term: &str) -> String {
        match self {
            MatrixVariant::TermFrequency => document.term_frequency(term).to_string(),
            MatrixVariant::TfIdf => corpus.tf_idf(document, term).to_string(),
        }
    }
}

fn write_matrix<W: Write>(corpus: &Corpus, variant: MatrixVariant, mut writer: W) -> io::Result<()> {
    // Header: blank cell, then one column per document
    write!(writer, ",")?;
    for document in corpus.documents() {
        write!(writer, "{},", document.name())?;
    }
    writeln!(writer)?;

    for term in corpus.vocabulary() {
        write!(writer, "{term},")?;
        for document in corpus.documents() {
            write!(writer, "{},", variant.cell(corpus, document, &term))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write the raw term-frequency matrix as CSV.
pub fn write_term_frequency<W: Write>(corpus: &Corpus, writer: W) -> Result<()> {
    Ok(write_matrix(corpus, MatrixVariant::TermFrequency, writer)?)
}

/// Write the tf-idf matrix as CSV.
pub fn write_tf_idf<W: Write>(corpus: &Corpus, writer: W) -> Result<()> {
    Ok(write_matrix(corpus, MatrixVariant::TfIdf, writer)?)
}

fn write_matrix_file(corpus: &Corpus, variant: MatrixVariant, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| TermiteError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    write_matrix(corpus, variant, &mut writer).map_err(|e| TermiteError::write(path, e))?;
    writer.flush().map_err(|e| TermiteError::write(path, e))?;

    Ok(())
}

/// Write both matrix variants next to each other.
///
/// The raw term-frequency matrix goes to `<base>.csv` and the tf-idf matrix
/// to `<base>Prime.csv`. Returns the two paths written. Write failures are
/// fatal: no skip-and-continue here.
pub fn write_csv_files<P: AsRef<Path>>(corpus: &Corpus, base: P) -> Result<(PathBuf, PathBuf)> {
    let base = base.as_ref();

    let mut raw_path = base.as_os_str().to_os_string();
    raw_path.push(".csv");
    let raw_path = PathBuf::from(raw_path);

    let mut weighted_path = base.as_os_str().to_os_string();
    weighted_path.push("Prime.csv");
    let weighted_path = PathBuf::from(weighted_path);

    write_matrix_file(corpus, MatrixVariant::TermFrequency, &raw_path)?;
    write_matrix_file(corpus, MatrixVariant::TfIdf, &weighted_path)?;

    Ok((raw_path, weighted_path))
}
