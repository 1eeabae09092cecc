//! Golden fixture error types

use std::path::PathBuf;

/// Errors raised while generating, writing or checking golden fixtures.
#[derive(Debug, thiserror::Error)]
pub enum GoldenError {
    // Tokenizer errors
    #[error("failed to load tokenizer: {0}")]
    TokenizerLoad(String),

    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("token id {0} has no vocabulary entry")]
    UnknownTokenId(u32),

    // Record invariant
    #[error(
        "misaligned record for {input:?}: {ids} ids, {offsets} offsets, {tokens} tokens"
    )]
    MisalignedRecord {
        input: String,
        ids: usize,
        offsets: usize,
        tokens: usize,
    },

    // Fixture I/O
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Check mode found records that no longer match the fixture on disk.
    #[error("golden file is stale: {differing} of {total} records differ")]
    Stale { differing: usize, total: usize },
}

impl GoldenError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for golden fixture operations
pub type Result<T> = std::result::Result<T, GoldenError>;
