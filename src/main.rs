//! Termite CLI binary.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use termite::index::DocumentIndexer;
use termite::matrix;

#[derive(Parser)]
#[command(name = "termite", version)]
#[command(about = "Generate term-document matrices (raw counts and tf-idf) from plain-text files")]
struct Cli {
    /// Paths of the documents to index
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Base path for the output matrices; writes <BASE>.csv and <BASE>Prime.csv
    #[arg(short, long, default_value = "term_matrix")]
    output: PathBuf,

    /// Index documents in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn run(cli: Cli) -> Result<()> {
    let indexer = DocumentIndexer::new()?;

    // Unreadable documents are logged and skipped; the run continues
    let corpus = if cli.parallel {
        indexer.par_index_paths(&cli.documents)
    } else {
        indexer.index_paths(&cli.documents)
    };

    tracing::info!(
        num_docs = corpus.len(),
        num_terms = corpus.vocabulary().len(),
        "indexed documents"
    );

    let (raw, weighted) = matrix::write_csv_files(&corpus, &cli.output)?;
    tracing::info!(raw = %raw.display(), weighted = %weighted.display(), "matrices written");

    Ok(())
}

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
