pub mod token;
pub mod vocabulary;
pub mod table;
pub mod serde;
pub mod evaluate;

use tracing::debug;

use crate::{
    vectorizer::{
        evaluate::ranking::{rank, Ranking},
        table::{DocumentVector, Table},
        token::{EmptyTokenPolicy, Tokenizer},
        vocabulary::Vocabulary,
    },
    Error,
};

/// Builds one count vector per document over a shared, growing vocabulary.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    /// Corpus vocabulary, header of the table
    vocabulary: Vocabulary,
    /// Document rows
    table: Table,
    /// Tokenizer used by `insert_text`
    tokenizer: Tokenizer,
}

impl CountVectorizer {
    /// Create a new CountVectorizer instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(empty_tokens: EmptyTokenPolicy) -> Self {
        Self {
            tokenizer: Tokenizer::with_policy(empty_tokens),
            ..Self::default()
        }
    }

    /// Add a document from an already tokenized stream.
    /// Tokens are counted in stream order, duplicates included.
    ///
    /// The new row starts with one zero per known term. A term seen for the
    /// first time is appended to the vocabulary and the row grows with it,
    /// so the row always covers the vocabulary as of its last token.
    pub fn insert_document<I, T>(&mut self, label: impl Into<String>, tokens: I) -> &DocumentVector
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut row = DocumentVector::zeros(label, self.vocabulary.len());
        for tok in tokens {
            let (idx, is_new) = self.vocabulary.intern(tok.as_ref());
            if is_new {
                // 新語彙は末尾に追加されるので idx == row.counts.len()
                debug_assert_eq!(idx, row.counts.len());
                row.counts.push(1);
            } else {
                row.counts[idx] += 1;
            }
        }
        debug!(
            doc = %row.label,
            tokens = row.token_sum(),
            vocabulary = self.vocabulary.len(),
            "document inserted"
        );
        self.table.push(row);
        &self.table.rows()[self.table.doc_num() - 1]
    }

    /// Tokenize `text` line by line and add it as a document
    pub fn insert_text(&mut self, label: impl Into<String>, text: &str) -> &DocumentVector {
        let tokenizer = self.tokenizer;
        let tokens = text.lines().flat_map(move |line| tokenizer.tokenize(line));
        self.insert_document(label, tokens)
    }

    /// Pad every row to the current vocabulary size
    pub fn finalize(&mut self) -> &Table {
        let dim = self.vocabulary.len();
        self.table.finalize(dim);
        &self.table
    }

    /// Finalize, then rank every document pair and keep the top `k`
    pub fn rank(&mut self, k: usize) -> Result<Ranking, Error> {
        self.finalize();
        rank(&self.table, k)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn doc_num(&self) -> usize {
        self.table.doc_num()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
