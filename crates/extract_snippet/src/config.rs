// crates/extract_snippet/src/config.rs

use std::path::PathBuf;

use block_extractor::{BraceBlockExtractor, ExtractOptions, RegionExtractor};
use snippet_assembler::AssemblyPlan;
use snippet_markers::{
    DEFAULT_DEDENT_WIDTH, DEFAULT_FUNCTION_ANCHOR, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_PATH,
    DEFAULT_TRAILING_ANCHOR, PREAMBLE, PUBLIC_MARKER,
};
use trailing_region::TrailingRegionExtractor;

/// Centralized runtime configuration composed from the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub function_anchor: String,
    pub trailing_anchor: Option<String>, // None == no trailing region
    pub dedent_width: usize,
    pub public_marker: String,
    pub strict: bool,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            function_anchor: DEFAULT_FUNCTION_ANCHOR.to_string(),
            trailing_anchor: Some(DEFAULT_TRAILING_ANCHOR.to_string()),
            dedent_width: DEFAULT_DEDENT_WIDTH,
            public_marker: PUBLIC_MARKER.to_string(),
            strict: false,
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            dedent_width: self.dedent_width,
            public_marker: self.public_marker.clone(),
        }
    }

    /// Builds the assembler plan described by this configuration.
    pub fn plan(&self) -> AssemblyPlan {
        let block = BraceBlockExtractor::with_options(
            self.function_anchor.as_str(),
            self.extract_options(),
        );
        AssemblyPlan {
            preamble: PREAMBLE.iter().map(|line| line.to_string()).collect(),
            block: Box::new(block),
            trailing: self.trailing_anchor.as_deref().map(|anchor| {
                Box::new(TrailingRegionExtractor::new(anchor)) as Box<dyn RegionExtractor>
            }),
            strict: self.strict,
        }
    }
}
