use serde::{Deserialize, Serialize};

/// Characters removed (once) from the start of a word.
pub const LEADING_PUNCT: [char; 4] = ['(', '[', '{', '-'];
/// Characters removed (once) from the end of a word.
pub const TRAILING_PUNCT: [char; 10] = ['.', ',', ':', '!', '?', ';', ')', ']', '}', '-'];

/// What to do with words that are empty after punctuation stripping
/// (e.g. a lone `.` or `(`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTokenPolicy {
    /// Index the empty string as a regular vocabulary term.
    #[default]
    Index,
    /// Drop the empty string.
    Discard,
}

/// Whitespace tokenizer
///
/// # Examples
/// ```
/// use doc_similarity::Tokenizer;
/// let tokenizer = Tokenizer::new();
/// let tokens: Vec<String> = tokenizer.tokenize("(Hello) World!").collect();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    pub empty_tokens: EmptyTokenPolicy,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(empty_tokens: EmptyTokenPolicy) -> Self {
        Self { empty_tokens }
    }

    /// Split a line on whitespace runs and normalize every word.
    /// Lazy; nothing is allocated until the iterator is consumed.
    pub fn tokenize<'a>(&self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        let policy = self.empty_tokens;
        line.split_whitespace()
            .map(normalize)
            .filter(move |tok| !(tok.is_empty() && policy == EmptyTokenPolicy::Discard))
    }
}

/// Normalize a single word.
/// Only one character is removed on each side, so `((a))` becomes `(a)`.
#[inline]
pub fn normalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let tok = lower.strip_prefix(&LEADING_PUNCT[..]).unwrap_or(lower.as_str());
    let tok = tok.strip_suffix(&TRAILING_PUNCT[..]).unwrap_or(tok);
    tok.to_string()
}
