// crates/block_extractor/src/lib.rs

//! Brace-depth block extraction.
//!
//! Finds the first line containing an anchor substring and captures lines
//! from there until the running count of `{` minus `}` drops back to zero.
//! There is no tokenizer: braces inside strings and comments count too.

pub mod brace;
pub mod transform;
pub mod error;
pub mod extraction;
pub mod scanner;
pub mod traits;
pub mod brace_block;
pub mod api;

pub use api::{extract_block, extract_block_with};
pub use brace_block::BraceBlockExtractor;
pub use error::ExtractError;
pub use extraction::{Completion, Extraction};
pub use scanner::{BlockScanner, ExtractOptions, ScanState};
pub use traits::RegionExtractor;
