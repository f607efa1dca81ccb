// crates/block_extractor/src/api.rs

use crate::brace_block::BraceBlockExtractor;
use crate::error::ExtractError;
use crate::extraction::Extraction;
use crate::scanner::ExtractOptions;

/// Extracts the block opened on the first line containing `anchor`, using the
/// default four-space dedent and `pub` marker.
pub fn extract_block<I, S>(lines: I, anchor: &str) -> Result<Extraction, ExtractError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_block_with(lines, anchor, &ExtractOptions::default())
}

/// Same as [`extract_block`] with explicit options.
pub fn extract_block_with<I, S>(
    lines: I,
    anchor: &str,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    BraceBlockExtractor::with_options(anchor, options.clone()).scan(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_block_accepts_str_slices() {
        let lines = ["fn foo() {\n", "  x = 1;\n", "}\n"];
        let extraction = extract_block(lines, "fn foo").unwrap();
        assert_eq!(extraction.lines(), &["pub fn foo() {\n", "  x = 1;\n", "}\n"]);
    }

    #[test]
    fn test_extract_block_with_zero_dedent() {
        let options = ExtractOptions { dedent_width: 0, ..ExtractOptions::default() };
        let lines = vec!["    fn foo() {\n", "        x\n", "    }\n"];
        let extraction = extract_block_with(lines, "fn foo", &options).unwrap();
        assert_eq!(extraction.lines(), &["pub fn foo() {\n", "        x\n", "    }\n"]);
    }
}
