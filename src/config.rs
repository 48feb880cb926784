use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::vectorizer::{evaluate::ranking::pair_count, token::EmptyTokenPolicy};

/// Folder scanned when none is given
pub const DEFAULT_FOLDER: &str = "documents";
/// Extensions recognized as text documents
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["txt", "log", "md"];
/// Smallest usable document count
pub const MIN_DOCUMENTS: usize = 2;

/// Output style of the ranking
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `"<a> - <b> | <score>"` lines
    #[default]
    Text,
    /// `RankingReport` as JSON
    Json,
}

/// Validated document count and number of reported pairs
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// N: documents to compare
    pub n: usize,
    /// K: ranked pairs to report
    pub k: usize,
}

/// Bring N and K into range.
///
/// - `n < 2` is raised to 2
/// - with C = n(n-1)/2 pairs: a single pair and `k > 0` gives `k = 1`,
///   otherwise `k` is capped at `C - 1`
/// - negative `k` reports nothing
pub fn validate_arguments(n: i64, k: i64) -> Limits {
    let n = if n < MIN_DOCUMENTS as i64 {
        warn!("N can't be lower than {}. N set to {}.", MIN_DOCUMENTS, MIN_DOCUMENTS);
        MIN_DOCUMENTS
    } else {
        n as usize
    };
    let requested = k.max(0) as usize;
    Limits { n, k: clamp_k(n, requested) }
}

fn clamp_k(n: usize, k: usize) -> usize {
    let pairs = pair_count(n);
    if pairs == 1 && k > 0 {
        1
    } else if k > pairs.saturating_sub(1) {
        warn!(requested = k, pairs, "K set to {}", pairs - 1);
        pairs - 1
    } else {
        k
    }
}

impl Limits {
    /// Re-validate after only `found` documents could be loaded
    pub fn shrink_to(self, found: usize) -> Limits {
        if found >= self.n {
            return self;
        }
        warn!(
            "Unable to find {} documents. N set to {} (amount of documents found). K adjusted accordingly.",
            self.n, found
        );
        validate_arguments(found as i64, self.k as i64)
    }
}

/// Everything a run needs
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub limits: Limits,
    pub folder: PathBuf,
    /// lowercase, without the leading dot
    pub extensions: Vec<String>,
    pub empty_tokens: EmptyTokenPolicy,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: validate_arguments(MIN_DOCUMENTS as i64, 0),
            folder: PathBuf::from(DEFAULT_FOLDER),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            empty_tokens: EmptyTokenPolicy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn new(n: i64, k: i64) -> Self {
        Self {
            limits: validate_arguments(n, k),
            ..Self::default()
        }
    }

    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Replace the accepted extensions; `.TXT` and `txt` are the same
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    pub fn with_empty_tokens(mut self, policy: EmptyTokenPolicy) -> Self {
        self.empty_tokens = policy;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
