// crates/extract_snippet/src/lib.rs

use anyhow::{Context, Result};

use snippet_assembler::{extract_to_file, Assembly};

pub mod cli;
pub mod config;

pub use cli::Cli;
pub use config::AppConfig;

/// Runs one extraction described by `config`: reads the source, assembles the
/// block and trailing region, and writes the output file.
pub fn run(config: &AppConfig) -> Result<Assembly> {
    log::debug!("Configuration: {:?}", config);
    let assembly = extract_to_file(&config.source, &config.output, &config.plan())
        .with_context(|| format!("Failed to extract from {}", config.source.display()))?;
    log::debug!(
        "Wrote {} block line(s) and {} trailing line(s) to {}",
        assembly.block_lines,
        assembly.trailing_lines,
        config.output.display()
    );
    Ok(assembly)
}
