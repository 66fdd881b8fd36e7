//! Entropy coder boundary — zstd, treated as opaque.

use crate::error::{RankGapError, Result};

/// Maximum zstd compression level.
pub const MAX_LEVEL: i32 = 22;

/// Compress `payload` with zstd at `level`.
pub fn compress(payload: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::bulk::compress(payload, level).map_err(|e| RankGapError::Entropy(e.to_string()))
}
