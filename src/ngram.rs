use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous run of tokens from one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NGram(Vec<String>);

impl NGram {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl From<&[&str]> for NGram {
    fn from(tokens: &[&str]) -> Self {
        Self(tokens.iter().map(|s| s.to_string()).collect())
    }
}

/// Sliding window of width `n`, step 1, over a token sequence. Produces
/// exactly `len - n + 1` grams, or none when the sequence is shorter
/// than `n`. No wraparound, no padding.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<NGram> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|w| NGram::new(w.to_vec())).collect()
}
