//! Fuzzy needle matching against display names
//!
//! A needle like `ubuntu-focal` is split on `_` and `-` into tokens that
//! must appear in order, with arbitrary text between them, anywhere in the
//! candidate name. Matching is case-insensitive and the tokens are literal
//! text. The pattern is built once per lookup rather than per candidate,
//! which keeps interactive completion off the pattern-construction cost.

/// A compiled needle: lowercase tokens to find in order
#[derive(Debug, Clone)]
pub struct NeedlePattern {
    tokens: Vec<String>,
}

impl NeedlePattern {
    /// Build a pattern from a raw needle. `_` and `-` act as wildcard
    /// separators; runs of them collapse.
    pub fn new(needle: &str) -> Self {
        let tokens = needle
            .to_lowercase()
            .split(['_', '-'])
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();
        Self { tokens }
    }

    /// Whether `name` contains every token, in order, with gaps allowed.
    ///
    /// An empty needle (or one made only of separators) matches any name.
    pub fn matches(&self, name: &str) -> bool {
        let haystack = name.to_lowercase();
        let mut rest = haystack.as_str();
        for token in &self.tokens {
            match rest.find(token.as_str()) {
                Some(at) => rest = &rest[at + token.len()..],
                None => return false,
            }
        }
        true
    }
}
