use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    vectorizer::{
        evaluate::scoring::{cosine_similarity, Similarity},
        table::Table,
    },
    Error,
};

/// One scored document pair
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub left: String,
    pub right: String,
    pub similarity: Similarity,
}

impl RankingEntry {
    /// `"<left> - <right>"`
    pub fn pair_label(&self) -> String {
        format!("{} - {}", self.left, self.right)
    }
}

impl fmt::Display for RankingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} | {}", self.left, self.right, self.similarity)
    }
}

/// Scored pairs, sorted by descending score
pub struct Ranking {
    pub list: Vec<RankingEntry>,
    /// number of pairs scored before truncation
    pub total_pairs: usize,
}

impl Ranking {
    /// Score every unordered pair `(i, j)`, `i < j`, of the table rows.
    /// The table must be finalized.
    pub fn score_pairs(table: &Table) -> Result<Self, Error> {
        let rows = table.rows();
        let mut list = Vec::with_capacity(pair_count(rows.len()));
        for (i, a) in rows.iter().enumerate() {
            for b in &rows[i + 1..] {
                let similarity = cosine_similarity(a.counts.as_slice(), b.counts.as_slice())?;
                let entry = RankingEntry {
                    left: a.label.clone(),
                    right: b.label.clone(),
                    similarity,
                };
                if let Similarity::Undefined(reason) = similarity {
                    warn!(pair = %entry.pair_label(), "similarity undefined: {}", reason);
                }
                list.push(entry);
            }
        }
        debug!(pairs = list.len(), "scored document pairs");
        let total_pairs = list.len();
        let mut ranking = Ranking { list, total_pairs };
        ranking.sort_by_score();
        Ok(ranking)
    }

    /// Sort by descending score.
    /// The sort is stable: equal scores keep pair generation order.
    /// Undefined pairs sort as `-1.0`.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list
            .sort_by(|a, b| b.similarity.value().total_cmp(&a.similarity.value()));
        self
    }

    /// Keep the first `k` entries.
    ///
    /// # Errors
    /// `Error::RankOutOfRange` if fewer than `k` entries exist.
    pub fn top(mut self, k: usize) -> Result<Self, Error> {
        if k > self.list.len() {
            return Err(Error::RankOutOfRange {
                k,
                pairs: self.list.len(),
            });
        }
        self.list.truncate(k);
        Ok(self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankingEntry> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl fmt::Display for Ranking {
    /// One `"<left> - <right> | <score>"` line per entry
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.list {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Ranking [")?;
            for entry in &self.list {
                writeln!(f, "    {}: {:?}", entry.pair_label(), entry.similarity)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Number of unordered pairs among `n` documents, saturating
#[inline]
pub fn pair_count(n: usize) -> usize {
    n.checked_mul(n.saturating_sub(1)).map_or(usize::MAX, |p| p / 2)
}

/// Rank every document pair and keep the top `k`.
/// `k` is not clamped here; see `config::validate_arguments`.
pub fn rank(table: &Table, k: usize) -> Result<Ranking, Error> {
    Ranking::score_pairs(table)?.top(k)
}
