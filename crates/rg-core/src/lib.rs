//! RankGap — token-rank gap transform for entropy coding.
//!
//! Rewrites a space-delimited token stream into a shorter, more regular
//! byte payload before handing it to zstd. Stages:
//! 1. Dictionary index (rank ↔ token)
//! 2. Gap-set extraction (stream offsets 1 and 2)
//! 3. Gap-complement delta coding (LEB128 varints)
//! 4. Rank compaction (skip gap-set members)
//! 5. Token-stream recoding (one code byte per in-vocabulary token)
//! 6. Payload assembly + entropy coding

pub mod compact;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod gapset;
pub mod pipeline;
pub mod recode;
pub mod varint;

pub use compact::CompactTable;
pub use dictionary::Dictionary;
pub use error::{RankGapError, Result};
pub use gapset::{GapSet, Relation};
pub use pipeline::{transform, RankGapPipeline, TransformConfig, TransformOutput, TransformReport};
