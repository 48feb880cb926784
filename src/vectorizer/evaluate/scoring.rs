use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{utils::math::{dot_and_norms, round_to}, Error};

/// Decimal places kept in a similarity score
pub const SCORE_DECIMALS: i32 = 4;

/// Score reported for pairs whose similarity is undefined
pub const UNDEFINED_SENTINEL: f64 = -1.0;

/// Why a similarity could not be computed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// One or both vectors have zero magnitude
    EmptyDocument,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::EmptyDocument => write!(f, "one document is empty"),
        }
    }
}

/// Result of comparing two documents
///
/// `Score` holds a cosine in `[-1, 1]` (in practice `[0, 1]` for counts),
/// rounded to 4 decimals.
/// `Undefined` is kept apart from any real score, but still ranks and prints
/// as the `-1.0` sentinel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Similarity {
    Score(f64),
    Undefined(UndefinedReason),
}

impl Similarity {
    /// Numeric value, `-1.0` for `Undefined`
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Similarity::Score(s) => *s,
            Similarity::Undefined(_) => UNDEFINED_SENTINEL,
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        matches!(self, Similarity::Score(_))
    }
}

impl fmt::Display for Similarity {
    /// Shortest round-trip form: `1.0`, `0.0`, `0.5774`, `-1.0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value())
    }
}

/// Cosine similarity of two count vectors of equal length
/// cos(θ) = Σ(a_i * b_i) / sqrt(||a||^2 * ||b||^2)
///
/// Dot product and norms are accumulated in one pass.
/// An all-zero vector gives `Similarity::Undefined(EmptyDocument)`, never an
/// error. Reporting it is left to the caller (see `rank`).
///
/// # Errors
/// `Error::DimensionMismatch` when the lengths differ.
///
/// # Examples
/// ```
/// use doc_similarity::{cosine_similarity, Similarity};
/// let s = cosine_similarity(&[1u32, 1, 0], &[1u32, 1, 0]).unwrap();
/// assert_eq!(s, Similarity::Score(1.0));
/// ```
pub fn cosine_similarity<N>(vec: &[N], other: &[N]) -> Result<Similarity, Error>
where
    N: Into<f64> + Copy,
{
    if vec.len() != other.len() {
        return Err(Error::DimensionMismatch {
            left: vec.len(),
            right: other.len(),
        });
    }

    let (dot, norm_a, norm_b): (f64, f64, f64) = dot_and_norms(vec, other);
    let denom = norm_a * norm_b;
    if denom == 0.0 {
        return Ok(Similarity::Undefined(UndefinedReason::EmptyDocument));
    }
    // sqrt は一回だけ
    Ok(Similarity::Score(round_to(dot / denom.sqrt(), SCORE_DECIMALS)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_multisets_score_one() {
        let s = cosine_similarity(&[2u32, 1, 0, 4], &[2u32, 1, 0, 4]).unwrap();
        assert_eq!(s, Similarity::Score(1.0));
        // scaled copies point in the same direction
        let s = cosine_similarity(&[1u32, 2, 3], &[2u32, 4, 6]).unwrap();
        assert!((s.value() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn disjoint_documents_score_zero() {
        let s = cosine_similarity(&[1u32, 1, 0, 0], &[0u32, 0, 1, 1]).unwrap();
        assert_eq!(s, Similarity::Score(0.0));
        assert!(s.is_defined());
        assert_eq!(s.to_string(), "0.0");
    }

    #[test]
    fn empty_document_is_undefined_sentinel() {
        let s = cosine_similarity(&[0u32, 0, 0], &[1u32, 2, 3]).unwrap();
        assert_eq!(s, Similarity::Undefined(UndefinedReason::EmptyDocument));
        assert_eq!(s.value(), -1.0);
        assert!(!s.is_defined());
        assert_eq!(s.to_string(), "-1.0");

        let both = cosine_similarity::<u32>(&[], &[]).unwrap();
        assert!(!both.is_defined());
    }

    #[test]
    fn rounds_to_four_decimals() {
        // 1 / sqrt(3)
        let s = cosine_similarity(&[1u32, 1, 1], &[1u32, 0, 0]).unwrap();
        assert_eq!(s, Similarity::Score(0.5774));
        assert_eq!(s.to_string(), "0.5774");
    }

    #[test]
    fn stays_within_bounds() {
        let docs: [[u32; 5]; 4] = [
            [3, 0, 1, 7, 2],
            [0, 5, 5, 0, 1],
            [1, 1, 1, 1, 1],
            [9, 0, 0, 0, 0],
        ];
        for a in &docs {
            for b in &docs {
                let v = cosine_similarity(a, b).unwrap().value();
                assert!((0.0..=1.0).contains(&v), "{v} out of range");
            }
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = cosine_similarity(&[1u32, 2], &[1u32, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn serializes_as_tagged_value() {
        let json = serde_json::to_string(&Similarity::Score(0.5)).unwrap();
        assert_eq!(json, r#"{"score":0.5}"#);
        let json = serde_json::to_string(&Similarity::Undefined(UndefinedReason::EmptyDocument)).unwrap();
        assert_eq!(json, r#"{"undefined":"empty_document"}"#);
    }
}
