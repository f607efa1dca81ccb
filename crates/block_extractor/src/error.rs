// crates/block_extractor/src/error.rs

use thiserror::Error;

/// Failures reported by the region extractors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Could not find anchor '{anchor}'")]
    AnchorNotFound { anchor: String },

    #[error("Block starting at '{anchor}' never closes ({captured} line(s) captured before end of input)")]
    UnterminatedBlock { anchor: String, captured: usize },

    #[error("Anchor must not be empty")]
    EmptyAnchor,
}
