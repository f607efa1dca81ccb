// crates/extract_snippet/src/cli.rs

use std::path::PathBuf;
use clap::Parser;

use snippet_markers::{
    DEFAULT_DEDENT_WIDTH, DEFAULT_FUNCTION_ANCHOR, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_PATH,
    DEFAULT_TRAILING_ANCHOR, PUBLIC_MARKER,
};

use crate::config::AppConfig;

/// Lifts a function out of a Rust source file by brace counting and writes it,
/// together with everything after a second anchor, to a standalone file.
#[derive(Debug, Parser)]
#[command(name = "extract_snippet", version)]
pub struct Cli {
    /// Source file to extract from
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// Destination file (parent directories are created)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Substring identifying the first line of the block to extract
    #[arg(long = "function", default_value = DEFAULT_FUNCTION_ANCHOR)]
    pub function_anchor: String,

    /// Substring from which everything up to end of file is copied
    #[arg(long = "trailing-from", default_value = DEFAULT_TRAILING_ANCHOR)]
    pub trailing_anchor: String,

    /// Skip the trailing region entirely
    #[arg(long, conflicts_with = "trailing_anchor")]
    pub no_trailing: bool,

    /// Leading spaces removed from every line after the block's first line
    #[arg(long, default_value_t = DEFAULT_DEDENT_WIDTH)]
    pub dedent_width: usize,

    /// Token the block's first line is made to start with
    #[arg(long, default_value = PUBLIC_MARKER)]
    pub public_marker: String,

    /// Fail when the block never closes instead of keeping the partial block
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            source: cli.source,
            output: cli.output,
            function_anchor: cli.function_anchor,
            trailing_anchor: (!cli.no_trailing).then_some(cli.trailing_anchor),
            dedent_width: cli.dedent_width,
            public_marker: cli.public_marker,
            strict: cli.strict,
            verbose: cli.verbose,
        }
    }
}
