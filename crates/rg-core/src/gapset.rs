//! Gap-set extraction and gap-complement delta coding.

use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::varint::{decode_varint, encode_varint};

/// Fixed-offset adjacency relation over the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Consecutive tokens (offset 1).
    Adjacent,
    /// Tokens two positions apart (offset 2).
    Skip,
}

impl Relation {
    pub fn offset(&self) -> usize {
        match self {
            Self::Adjacent => 1,
            Self::Skip => 2,
        }
    }
}

/// Circular rank distances observed between dictionary-member tokens
/// at a fixed stream offset.
#[derive(Debug, Clone, Default)]
pub struct GapSet {
    distances: HashSet<usize>,
}

impl GapSet {
    /// Scan `tokens` at the relation's offset and record every circular
    /// distance between in-dictionary pairs. Equal ranks yield a distance
    /// of `dict.len()`, outside the tracked range, and are skipped.
    pub fn extract(dict: &Dictionary, tokens: &[&str], relation: Relation) -> Self {
        let offset = relation.offset();
        let mut distances = HashSet::new();
        for i in offset..tokens.len() {
            let (Some(from), Some(to)) = (dict.rank(tokens[i - offset]), dict.rank(tokens[i]))
            else {
                continue;
            };
            let d = dict.circular_distance(from, to);
            if d < dict.len() {
                distances.insert(d);
            }
        }
        Self { distances }
    }

    pub fn contains(&self, distance: usize) -> bool {
        self.distances.contains(&distance)
    }

    /// Number of distinct distances observed.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Ascending ranks in [0, len) absent from this set.
    pub fn complement(&self, len: usize) -> Vec<usize> {
        (0..len).filter(|d| !self.distances.contains(d)).collect()
    }
}

/// Delta-encode an ascending complement list: first value, then successive
/// differences, each as a LEB128 varint.
pub fn encode_gap_complement(complement: &[usize]) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut last = 0;
    for &rank in complement {
        encode_varint((rank - last) as u64, &mut buf);
        last = rank;
    }
    buf
}

/// Inverse of [`encode_gap_complement`]: varint-decode and prefix-sum back
/// to the complement list.
pub fn decode_gap_complement(buf: &[u8]) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    let mut pos = 0;
    let mut last = 0usize;
    while pos < buf.len() {
        last += decode_varint(buf, &mut pos)? as usize;
        out.push(last);
    }
    Ok(out)
}
