//! Transform pipeline — orchestrates all stages and the entropy coder.

use serde::{Deserialize, Serialize};

use crate::compact::CompactTable;
use crate::dictionary::Dictionary;
use crate::entropy;
use crate::error::Result;
use crate::gapset::{encode_gap_complement, GapSet, Relation};
use crate::recode;

/// Transform configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Level handed to the entropy coder.
    pub zstd_level: i32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            zstd_level: entropy::MAX_LEVEL,
        }
    }
}

/// Per-segment diagnostics for one transform run.
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    pub original_len: usize,
    pub payload_len: usize,
    pub compressed_len: usize,
    pub adjacent_code_len: usize,
    pub skip_code_len: usize,
    pub oov_len: usize,
    pub recoded_len: usize,
    pub oov_count: usize,
}

impl TransformReport {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Transform output: the assembled payload, its entropy-coded form, and
/// the diagnostics report.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub payload: Vec<u8>,
    pub compressed: Vec<u8>,
    pub report: TransformReport,
}

/// The token-rank transform pipeline. A pure function of
/// (dictionary, text); no state survives a call.
pub struct RankGapPipeline {
    pub config: TransformConfig,
}

impl RankGapPipeline {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Pipeline at maximum entropy-coder effort.
    pub fn max_effort() -> Self {
        Self::new(TransformConfig::default())
    }

    /// Rewrite `text` against `dict` and entropy-code the result.
    ///
    /// The payload is four segments in fixed order: adjacent gap-complement
    /// delta code, skip gap-complement delta code, out-of-vocabulary tokens
    /// (space-joined UTF-8), recoded byte stream.
    pub fn transform(&self, dict: &Dictionary, text: &str) -> Result<TransformOutput> {
        // Tokenize on single ASCII spaces only.
        let tokens: Vec<&str> = text.split(' ').collect();

        let adjacent_gaps = GapSet::extract(dict, &tokens, Relation::Adjacent);
        let skip_gaps = GapSet::extract(dict, &tokens, Relation::Skip);

        let adjacent_code = encode_gap_complement(&adjacent_gaps.complement(dict.len()));
        let skip_code = encode_gap_complement(&skip_gaps.complement(dict.len()));

        let adjacent_table = CompactTable::build(&adjacent_gaps, dict.len());
        let skip_table = CompactTable::build(&skip_gaps, dict.len());

        let recoded = recode::recode(dict, &tokens, &adjacent_table, &skip_table)?;
        let oov_text = recoded.oov.join(" ");

        let mut payload = Vec::with_capacity(
            adjacent_code.len() + skip_code.len() + oov_text.len() + recoded.codes.len(),
        );
        payload.extend_from_slice(&adjacent_code);
        payload.extend_from_slice(&skip_code);
        payload.extend_from_slice(oov_text.as_bytes());
        payload.extend_from_slice(&recoded.codes);

        tracing::debug!(
            adjacent = adjacent_code.len(),
            skip = skip_code.len(),
            oov = oov_text.len(),
            recoded = recoded.codes.len(),
            "assembled payload"
        );

        let compressed = entropy::compress(&payload, self.config.zstd_level)?;

        let report = TransformReport {
            original_len: text.len(),
            payload_len: payload.len(),
            compressed_len: compressed.len(),
            adjacent_code_len: adjacent_code.len(),
            skip_code_len: skip_code.len(),
            oov_len: oov_text.len(),
            recoded_len: recoded.codes.len(),
            oov_count: recoded.oov.len(),
        };

        Ok(TransformOutput {
            payload,
            compressed,
            report,
        })
    }
}

impl Default for RankGapPipeline {
    fn default() -> Self {
        Self::max_effort()
    }
}

/// One-shot transform at maximum effort.
pub fn transform(dict: &Dictionary, text: &str) -> Result<TransformOutput> {
    RankGapPipeline::max_effort().transform(dict, text)
}
