//! Dictionary index — ordered token list with rank lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{RankGapError, Result};

/// Ordered token dictionary. A token's rank is its zero-based position.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tokens: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl Dictionary {
    /// Build from an ordered token sequence. Duplicates break the
    /// rank bijection and are rejected.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::default();
        for token in tokens {
            let token = token.into();
            if let Some(&rank) = dict.ranks.get(&token) {
                return Err(RankGapError::DuplicateToken { token, rank });
            }
            dict.ranks.insert(token.clone(), dict.tokens.len());
            dict.tokens.push(token);
        }
        Ok(dict)
    }

    /// Parse a newline-separated dictionary body. Line order defines rank;
    /// a trailing newline yields an empty-string token.
    pub fn from_lines(body: &str) -> Result<Self> {
        Self::from_tokens(body.split('\n'))
    }

    /// Load a newline-separated dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_lines(&fs::read_to_string(path)?)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rank of `token`, if present.
    pub fn rank(&self, token: &str) -> Option<usize> {
        self.ranks.get(token).copied()
    }

    /// Token at `rank`, if in range.
    pub fn token(&self, rank: usize) -> Option<&str> {
        self.tokens.get(rank).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ranks.contains_key(token)
    }

    /// Circular rank distance from `from` to `to`. Equal ranks yield
    /// `len()`, which lies outside the tracked range [0, len).
    pub fn circular_distance(&self, from: usize, to: usize) -> usize {
        if to > from {
            to - from
        } else {
            self.len() + to - from
        }
    }
}
