//! Token-stream recoding — one code byte per in-vocabulary token.

use crate::compact::CompactTable;
use crate::dictionary::Dictionary;
use crate::error::{RankGapError, Result};

/// Recoded stream: code bytes plus out-of-vocabulary passthrough.
#[derive(Debug, Clone, Default)]
pub struct RecodedStream {
    pub codes: Vec<u8>,
    pub oov: Vec<String>,
}

/// Walk `tokens` from position 2. An out-of-vocabulary token is collected
/// verbatim; an in-vocabulary token emits a compacted-rank byte chosen from
/// its two predecessors:
/// - previous token in the dictionary → `adjacent` code of the previous
///   token's rank (whether or not the token before it is known, so the two
///   contexts share a byte and the code stream is not uniquely invertible);
/// - only the token two back in the dictionary → `skip` code of its rank;
/// - neither known → the position is dropped.
pub fn recode(
    dict: &Dictionary,
    tokens: &[&str],
    adjacent: &CompactTable,
    skip: &CompactTable,
) -> Result<RecodedStream> {
    let mut stream = RecodedStream::default();
    for i in 2..tokens.len() {
        if !dict.contains(tokens[i]) {
            stream.oov.push(tokens[i].to_string());
            continue;
        }
        let code = match (dict.rank(tokens[i - 2]), dict.rank(tokens[i - 1])) {
            (_, Some(prev)) => adjacent.code(prev),
            (Some(before), None) => skip.code(before),
            (None, None) => continue,
        };
        stream.codes.push(code_byte(code)?);
    }
    Ok(stream)
}

/// A code must fit a single byte; larger values fail closed.
fn code_byte(code: usize) -> Result<u8> {
    u8::try_from(code).map_err(|_| RankGapError::CodeOverflow { value: code })
}
