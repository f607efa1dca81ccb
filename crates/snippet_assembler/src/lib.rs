// crates/snippet_assembler/src/lib.rs

use std::fs;
use std::path::Path;
use anyhow::{bail, Context, Result};

use block_extractor::{BraceBlockExtractor, Completion, ExtractError, RegionExtractor};
use snippet_markers::{DEFAULT_FUNCTION_ANCHOR, DEFAULT_TRAILING_ANCHOR, PREAMBLE};
use trailing_region::TrailingRegionExtractor;

/// What to pull out of the source file and how to lay it out.
pub struct AssemblyPlan {
    /// Lines written first, each carrying its own terminator.
    pub preamble: Vec<String>,
    /// Extractor for the standalone block. A missing anchor is fatal.
    pub block: Box<dyn RegionExtractor>,
    /// Extractor for the region copied after the block. A missing anchor is only warned about.
    pub trailing: Option<Box<dyn RegionExtractor>>,
    /// Fail instead of warning when the block never closes.
    pub strict: bool,
}

impl Default for AssemblyPlan {
    fn default() -> Self {
        Self {
            preamble: PREAMBLE.iter().map(|line| line.to_string()).collect(),
            block: Box::new(BraceBlockExtractor::new(DEFAULT_FUNCTION_ANCHOR)),
            trailing: Some(Box::new(TrailingRegionExtractor::new(DEFAULT_TRAILING_ANCHOR))),
            strict: false,
        }
    }
}

/// The assembled output together with a summary of what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub text: String,
    pub block_completion: Completion,
    pub block_lines: usize,
    pub trailing_lines: usize,
}

/// Splits file content into lines, keeping each line's terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Reads the whole source file into memory as lines.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read as UTF-8.
pub fn read_source_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("Source file '{}' not found.", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading source file {}", path.display()))?;
    Ok(split_lines(&content))
}

/// Builds the output document: preamble, extracted block, a blank line, then
/// the trailing region.
pub fn assemble(lines: &[String], plan: &AssemblyPlan) -> Result<Assembly> {
    let mut text: String = plan.preamble.concat();

    let block = plan.block.extract(lines)?;
    let block_completion = block.completion();
    let block_lines = block.len();
    if plan.strict {
        text.push_str(&block.into_closed()?.concat());
    } else {
        if block.is_truncated() {
            log::warn!(
                "Block for '{}' never closed; keeping {} line(s) up to end of input",
                block.anchor(),
                block_lines
            );
        }
        text.push_str(&block.text());
    }
    text.push('\n');

    let mut trailing_lines = 0;
    if let Some(trailing) = &plan.trailing {
        match trailing.extract(lines) {
            Ok(region) => {
                trailing_lines = region.len();
                text.push_str(&region.text());
            }
            Err(err @ ExtractError::AnchorNotFound { .. }) => {
                log::warn!("{}; trailing region left empty", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Assembly { text, block_completion, block_lines, trailing_lines })
}

/// Writes the assembled text, creating missing parent directories.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Error creating directory {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("Error writing {}", path.display()))
}

/// Reads `source`, assembles it according to `plan` and writes the result to `dest`.
pub fn extract_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    plan: &AssemblyPlan,
) -> Result<Assembly> {
    let lines = read_source_lines(source)?;
    let assembly = assemble(&lines, plan)?;
    write_output(dest, &assembly.text)?;
    Ok(assembly)
}
