use serde::{Deserialize, Serialize};

use crate::vectorizer::vocabulary::Vocabulary;

/// Label shown in the first column of the header row.
pub const HEADER_LABEL: &str = "Doc ID";

/// One document row: label and raw term counts.
/// `counts[i]` is the number of occurrences of vocabulary term `i`.
/// Before `Table::finalize` a row only covers the vocabulary as it was when
/// the document was inserted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentVector {
    pub label: String,
    pub counts: Vec<u32>,
}

impl DocumentVector {
    /// New row with `dim` zero counts
    pub fn zeros(label: impl Into<String>, dim: usize) -> Self {
        Self {
            label: label.into(),
            counts: vec![0; dim],
        }
    }

    /// Row width including the label column
    #[inline]
    pub fn width(&self) -> usize {
        self.counts.len() + 1
    }

    /// No counted token at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts
    pub fn token_sum(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

/// Document x vocabulary table.
/// The header is the vocabulary itself; rows are stored in insertion order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<DocumentVector>,
}

impl Table {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, row: DocumentVector) {
        self.rows.push(row);
    }

    /// Document rows, header excluded
    #[inline]
    pub fn rows(&self) -> &[DocumentVector] {
        &self.rows
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.rows.len()
    }

    /// Header row: `Doc ID` followed by every vocabulary term
    pub fn header<'a>(&self, vocab: &'a Vocabulary) -> Vec<&'a str> {
        std::iter::once(HEADER_LABEL).chain(vocab.iter()).collect()
    }

    /// Pad every row with trailing zeros up to `dim` counts.
    /// Rows already at `dim` are untouched, so this is idempotent.
    pub fn finalize(&mut self, dim: usize) -> &mut Self {
        for row in self.rows.iter_mut() {
            debug_assert!(row.counts.len() <= dim, "row {} is wider than the vocabulary", row.label);
            if row.counts.len() < dim {
                row.counts.resize(dim, 0);
            }
        }
        self
    }

    /// All rows have exactly `dim` counts
    pub fn is_finalized(&self, dim: usize) -> bool {
        self.rows.iter().all(|row| row.counts.len() == dim)
    }
}
