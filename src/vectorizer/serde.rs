use serde::{ser::SerializeStruct, Deserialize, Serialize};

use crate::vectorizer::{
    evaluate::{ranking::{Ranking, RankingEntry}, scoring::Similarity},
    CountVectorizer,
};

/// Serializable result of one run.
/// Holds no reference to the vectorizer, only what is reported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankingReport {
    /// number of documents compared
    pub documents: usize,
    /// final vocabulary size
    pub vocabulary: usize,
    /// number of pairs scored
    pub total_pairs: usize,
    /// number of entries kept
    pub k: usize,
    pub entries: Vec<ReportEntry>,
}

/// One reported pair
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub pair: String,
    pub left: String,
    pub right: String,
    pub similarity: Similarity,
}

impl From<&RankingEntry> for ReportEntry {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            pair: entry.pair_label(),
            left: entry.left.clone(),
            right: entry.right.clone(),
            similarity: entry.similarity,
        }
    }
}

impl RankingReport {
    pub fn new(vectorizer: &CountVectorizer, ranking: &Ranking) -> Self {
        Self {
            documents: vectorizer.doc_num(),
            vocabulary: vectorizer.vocabulary().len(),
            total_pairs: ranking.total_pairs,
            k: ranking.len(),
            entries: ranking.iter().map(ReportEntry::from).collect(),
        }
    }
}

impl Serialize for CountVectorizer {
    /// Serializes the vocabulary and the table.
    /// The tokenizer setting is not part of the output.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CountVectorizer", 2)?;
        state.serialize_field("vocabulary", self.vocabulary())?;
        state.serialize_field("table", self.table())?;
        state.end()
    }
}
