use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankGapError {
    #[error("Duplicate dictionary token: {token:?} (first at rank {rank})")]
    DuplicateToken { token: String, rank: usize },
    #[error("Compacted code out of byte range: {value}")]
    CodeOverflow { value: usize },
    #[error("Malformed delta code: {0}")]
    MalformedDelta(String),
    #[error("Entropy coder error: {0}")]
    Entropy(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RankGapError>;
