/// This crate is a Document Similarity Engine using term count vectors.
pub mod vectorizer;
pub mod utils;
pub mod config;
pub mod loader;

pub use error::Error;

mod error {
    use std::path::PathBuf;

    /// Errors for document similarity ranking.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// Two count vectors of different length were compared.
        /// The table was not finalized before scoring.
        #[error("dimension mismatch: {left} != {right}")]
        DimensionMismatch { left: usize, right: usize },
        /// More ranked entries were requested than pairs exist.
        #[error("requested {k} ranked pairs but only {pairs} exist")]
        RankOutOfRange { k: usize, pairs: usize },
        /// Less than two documents were found.
        #[error("Not enough documents were found (at least 2 needed, found {found}).")]
        NotEnoughDocuments { found: usize },
        /// Filesystem access failed.
        #[error("failed to access {}", .path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }
}

/// Count Vectorizer
/// The top-level struct of this crate, providing the document vectorization
/// and similarity ranking features.
/// It converts a document collection into term count vectors aligned to one
/// shared vocabulary and ranks every document pair by cosine similarity.
///
/// Internally, it holds:
/// - The corpus vocabulary (insertion ordered, hash indexed)
/// - The document x vocabulary count table
/// - The tokenizer used by `insert_text`
///
/// Rows are padded to the final vocabulary size by `finalize`, which
/// `rank` calls before scoring.
pub use vectorizer::CountVectorizer;

/// Tokenizer
/// Splits raw text on whitespace and normalizes each word:
/// - lowercased
/// - one leading `( [ { -` removed
/// - one trailing `. , : ! ? ; ) ] } -` removed
///
/// Words made only of punctuation may become the empty string.
/// `EmptyTokenPolicy` decides whether that string is indexed or dropped.
pub use vectorizer::token::{EmptyTokenPolicy, Tokenizer};

/// Vocabulary
/// Ordered set of distinct tokens seen so far, first seen first.
/// It only grows; existing entries never move.
pub use vectorizer::vocabulary::Vocabulary;

/// Document Table
/// The header (vocabulary) plus one count row per document, in insertion order.
pub use vectorizer::table::{DocumentVector, Table};

/// Similarity result
/// Either a cosine score rounded to 4 decimals, or `Undefined` when one of the
/// two documents is empty. `Undefined` keeps the `-1.0` sentinel through
/// `Similarity::value`.
pub use vectorizer::evaluate::scoring::{cosine_similarity, Similarity, UndefinedReason};

/// Ranking structures
/// - `Ranking`: all scored pairs sorted by descending score
/// - `RankingEntry`: one document pair with its similarity
pub use vectorizer::evaluate::ranking::{rank, Ranking, RankingEntry};

/// Serializable ranking report for the JSON output.
pub use vectorizer::serde::RankingReport;
