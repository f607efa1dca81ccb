// crates/block_extractor/src/traits.rs

use crate::error::ExtractError;
use crate::extraction::Extraction;

/// Trait for pulling a region of lines out of a fully loaded source file.
pub trait RegionExtractor {
    /// Given the source `lines`, returns the captured region starting at the
    /// extractor's anchor. Returns `AnchorNotFound` if no line contains it.
    fn extract(&self, lines: &[String]) -> Result<Extraction, ExtractError>;
}
