//! `cosrank` CLI: rank a directory of text documents against a query file.
//!
//! Results go to stdout, one line per ranked document (or a JSON array with
//! `--json`); diagnostics go to stderr.

use anyhow::{bail, Context, Result};
use clap::Parser;
use cosrank::{rank, Corpus, Document, StopwordSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Rank a repository of documents by TF-IDF cosine similarity to a query.
#[derive(Parser, Debug)]
#[command(name = "cosrank", version, about)]
struct Args {
    /// Path to the query document.
    #[arg(short = 'f', long)]
    query: PathBuf,

    /// Directory of documents to rank. Every entry must be a regular file.
    #[arg(short = 'd', long)]
    repository: PathBuf,

    /// Maximum number of results to print.
    #[arg(short = 'k', long, default_value_t = 10)]
    count: usize,

    /// Stopword file, one or more words per line. Omit to keep every term.
    #[arg(short = 's', long)]
    stopwords: Option<PathBuf>,

    /// Print results as a JSON array instead of plain text.
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stopwords = args
        .stopwords
        .as_deref()
        .map(|path| -> Result<StopwordSet> {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read stopword file {}", path.display()))?;
            Ok(StopwordSet::from_text(&text))
        })
        .transpose()?;

    let query_text = fs::read_to_string(&args.query)
        .with_context(|| format!("failed to read query file {}", args.query.display()))?;
    let query = Document::from_text(file_name(&args.query), &query_text, stopwords.as_ref());

    let mut corpus = load_repository(&args.repository, stopwords.as_ref())?;
    let results = rank(&query, &mut corpus, args.count);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!(
                "{}. {}\t Similarity: {:.6}",
                result.rank, result.name, result.score
            );
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "cosrank=debug" } else { "cosrank=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Reads every file in `dir` into a corpus, in repository order.
fn load_repository(dir: &Path, stopwords: Option<&StopwordSet>) -> Result<Corpus> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read repository directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to list repository {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            bail!("repository entry {} is not a regular file", path.display());
        }
        paths.push(path);
    }
    paths.sort_by_key(|path| repository_order_key(path));

    let mut corpus = Corpus::new();
    for path in &paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display()))?;
        corpus.push(Document::from_text(file_name(path), &text, stopwords));
    }
    tracing::debug!(documents = corpus.len(), "loaded repository");
    Ok(corpus)
}

/// Repository ordering: by the number formed from the digits of the file
/// name, then lexically. `2.txt` sorts before `10.txt`, and names without
/// any digit sort after all numbered ones.
fn repository_order_key(path: &Path) -> (bool, u64, String) {
    let name = file_name(path);
    let number = filename_number(&name);
    (number.is_none(), number.unwrap_or(0), name)
}

/// The number formed by concatenating the ASCII digits of `name`, if any.
/// Absurdly long digit runs saturate at `u64::MAX` instead of overflowing.
fn filename_number(name: &str) -> Option<u64> {
    let mut digits = name.chars().filter_map(|c| c.to_digit(10)).peekable();
    digits.peek()?;
    let mut value = 0u64;
    for digit in digits {
        value = value.saturating_mul(10).saturating_add(u64::from(digit));
    }
    Some(value)
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
