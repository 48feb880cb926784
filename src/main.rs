use std::{io::{self, Write}, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use doc_similarity::{
    config::{Config, OutputFormat, DEFAULT_EXTENSIONS, DEFAULT_FOLDER},
    loader::load_corpus,
    EmptyTokenPolicy, RankingReport,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank the most similar pairs of text documents", long_about = None)]
struct Args {
    /// Number of documents to compare (at least 2)
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Number of most similar pairs to report
    #[arg(allow_negative_numbers = true)]
    k: i64,

    /// Folder holding the documents; created if missing
    #[arg(default_value = DEFAULT_FOLDER)]
    folder: PathBuf,

    /// Accepted file extension (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_values_t = DEFAULT_EXTENSIONS.map(String::from))]
    extensions: Vec<String>,

    /// What to do with words that are empty after stripping punctuation
    #[arg(long, value_enum, default_value_t = EmptyTokens::Index)]
    empty_tokens: EmptyTokens,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EmptyTokens {
    Index,
    Discard,
}

impl From<EmptyTokens> for EmptyTokenPolicy {
    fn from(value: EmptyTokens) -> Self {
        match value {
            EmptyTokens::Index => EmptyTokenPolicy::Index,
            EmptyTokens::Discard => EmptyTokenPolicy::Discard,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout is reserved for the ranking
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::new(args.n, args.k)
        .with_folder(args.folder)
        .with_extensions(&args.extensions)
        .with_empty_tokens(args.empty_tokens.into())
        .with_format(args.format.into());
    info!(?config, "starting");

    let (mut vectorizer, limits) = load_corpus(&config)
        .with_context(|| format!("loading documents from {}", config.folder.display()))?;
    let ranking = vectorizer.rank(limits.k)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => write!(out, "{}", ranking)?,
        OutputFormat::Json => {
            let report = RankingReport::new(&vectorizer, &ranking);
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
