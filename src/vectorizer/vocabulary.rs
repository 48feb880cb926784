use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Vocabulary
/// Distinct tokens in first-seen order.
/// Lookup is hashed, the position of a token is its dimension in every
/// document vector.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self {
            terms: IndexSet::new(),
        }
    }

    /// Return the dimension of `term`, appending it if unseen.
    /// The bool is `true` when the term was new.
    #[inline]
    pub fn intern(&mut self, term: &str) -> (usize, bool) {
        if let Some(idx) = self.terms.get_index_of(term) {
            return (idx, false);
        }
        self.terms.insert_full(Box::from(term))
    }

    /// Dimension of `term`, if known
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at dimension `idx`
    #[inline]
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get_index(idx).map(|t| &**t)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in dimension order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| &**t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_keeps_first_seen_order() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.intern("cat"), (0, true));
        assert_eq!(vocab.intern("dog"), (1, true));
        assert_eq!(vocab.intern("cat"), (0, false));
        assert_eq!(vocab.intern(""), (2, true));

        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["cat", "dog", ""]);
        assert_eq!(vocab.index_of("dog"), Some(1));
        assert_eq!(vocab.term(2), Some(""));
        assert_eq!(vocab.term(3), None);
        assert!(!vocab.contains("fish"));
    }

    #[test]
    fn grows_as_a_prefix_compatible_sequence() {
        let mut vocab = Vocabulary::new();
        let mut snapshots: Vec<Vec<String>> = Vec::new();
        for doc in [["a", "b", "a"], ["c", "a", "d"], ["b", "e", "c"]] {
            for tok in doc {
                vocab.intern(tok);
            }
            snapshots.push(vocab.iter().map(String::from).collect());
        }
        for pair in snapshots.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
        }
        assert_eq!(snapshots[2], vec!["a", "b", "c", "d", "e"]);
    }
}
