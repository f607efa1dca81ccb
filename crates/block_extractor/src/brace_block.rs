// crates/block_extractor/src/brace_block.rs

use crate::error::ExtractError;
use crate::extraction::Extraction;
use crate::scanner::{BlockScanner, ExtractOptions, ScanState};
use crate::traits::RegionExtractor;

/// `RegionExtractor` that captures the brace-delimited block opened at the anchor.
#[derive(Debug, Clone)]
pub struct BraceBlockExtractor {
    anchor: String,
    options: ExtractOptions,
}

impl BraceBlockExtractor {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self::with_options(anchor, ExtractOptions::default())
    }

    pub fn with_options(anchor: impl Into<String>, options: ExtractOptions) -> Self {
        Self { anchor: anchor.into(), options }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub(crate) fn scan<I, S>(&self, lines: I) -> Result<Extraction, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scanner = BlockScanner::new(self.anchor.as_str(), self.options.clone())?;
        for line in lines {
            if scanner.push(line.as_ref()) == ScanState::Closed {
                break;
            }
        }
        scanner.finish()
    }
}

impl RegionExtractor for BraceBlockExtractor {
    fn extract(&self, lines: &[String]) -> Result<Extraction, ExtractError> {
        self.scan(lines)
    }
}
