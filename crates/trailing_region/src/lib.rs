// crates/trailing_region/src/lib.rs

use block_extractor::{ExtractError, Extraction, RegionExtractor};
use snippet_markers::{IMPORT_PREFIX, LOCAL_MACRO, NAMESPACED_MACRO};

/// Copies everything from the first line containing the anchor to the end of
/// the input.
///
/// There is no closing condition. Lines whose trimmed text starts with one of
/// `skip_prefixes` are dropped, and every `(from, to)` pair in `rewrites` is
/// applied as a plain substring replacement to the lines that remain.
#[derive(Debug, Clone)]
pub struct TrailingRegionExtractor {
    anchor: String,
    skip_prefixes: Vec<String>,
    rewrites: Vec<(String, String)>,
}

impl TrailingRegionExtractor {
    /// Creates an extractor that drops `use` lines and rewrites
    /// `bitflags::bitflags!` to `bitflags!`.
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            skip_prefixes: vec![IMPORT_PREFIX.to_string()],
            rewrites: vec![(NAMESPACED_MACRO.to_string(), LOCAL_MACRO.to_string())],
        }
    }

    /// Creates an extractor that copies lines verbatim.
    pub fn verbatim(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            skip_prefixes: Vec::new(),
            rewrites: Vec::new(),
        }
    }

    pub fn skip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.skip_prefixes.push(prefix.into());
        self
    }

    pub fn rewrite(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rewrites.push((from.into(), to.into()));
        self
    }

    fn is_skipped(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.skip_prefixes.iter().any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    fn apply_rewrites(&self, line: &str) -> String {
        self.rewrites
            .iter()
            .fold(line.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }
}

impl RegionExtractor for TrailingRegionExtractor {
    fn extract(&self, lines: &[String]) -> Result<Extraction, ExtractError> {
        if self.anchor.is_empty() {
            return Err(ExtractError::EmptyAnchor);
        }
        let start = lines
            .iter()
            .position(|line| line.contains(self.anchor.as_str()))
            .ok_or_else(|| ExtractError::AnchorNotFound { anchor: self.anchor.clone() })?;

        let mut skipped = 0usize;
        let captured: Vec<String> = lines[start..]
            .iter()
            .filter(|line| {
                let skip = self.is_skipped(line);
                if skip {
                    skipped += 1;
                }
                !skip
            })
            .map(|line| self.apply_rewrites(line))
            .collect();

        log::debug!(
            "Trailing region from '{}' (line {}): {} line(s) kept, {} dropped",
            self.anchor,
            start + 1,
            captured.len(),
            skipped
        );
        Ok(Extraction::closed(self.anchor.as_str(), captured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(content: &str) -> Vec<String> {
        content.split_inclusive('\n').map(str::to_string).collect()
    }

    const KEYBOARD: &str = concat!(
        "use std::borrow::Cow;\n",
        "\n",
        "fn should_build_sequence() -> bool {\n",
        "    true\n",
        "}\n",
        "\n",
        "fn build_sequence(key: Key) -> Vec<u8> {\n",
        "    use winit::keyboard::Key;\n",
        "    Vec::new()\n",
        "}\n",
        "\n",
        "bitflags::bitflags! {\n",
        "    struct Mods: u8 {\n",
        "        const SHIFT = 0b1;\n",
        "    }\n",
        "}\n",
    );

    #[test]
    fn test_captures_to_end_of_input() {
        let lines = to_lines(KEYBOARD);
        let extraction = TrailingRegionExtractor::new("fn build_sequence").extract(&lines).unwrap();
        assert!(!extraction.is_truncated());
        assert_eq!(
            extraction.text(),
            concat!(
                "fn build_sequence(key: Key) -> Vec<u8> {\n",
                "    Vec::new()\n",
                "}\n",
                "\n",
                "bitflags! {\n",
                "    struct Mods: u8 {\n",
                "        const SHIFT = 0b1;\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_verbatim_keeps_everything() {
        let lines = to_lines(KEYBOARD);
        let extraction = TrailingRegionExtractor::verbatim("bitflags::").extract(&lines).unwrap();
        assert_eq!(extraction.lines()[0], "bitflags::bitflags! {\n");
        assert_eq!(extraction.len(), 5);
    }

    #[test]
    fn test_anchor_line_itself_can_be_skipped() {
        let lines = to_lines("use a::b;\nfn x() {}\n");
        let extraction = TrailingRegionExtractor::new("use a").extract(&lines).unwrap();
        assert_eq!(extraction.lines(), &["fn x() {}\n"]);
    }

    #[test]
    fn test_custom_rules() {
        let lines = to_lines("fn go() {\n#include <x.h>\n    std::fmt()\n}\n");
        let extraction = TrailingRegionExtractor::verbatim("fn go")
            .skip_prefix("#include")
            .rewrite("std::", "core::")
            .extract(&lines)
            .unwrap();
        assert_eq!(extraction.lines(), &["fn go() {\n", "    core::fmt()\n", "}\n"]);
    }

    #[test]
    fn test_missing_anchor() {
        let lines = to_lines(KEYBOARD);
        let err = TrailingRegionExtractor::new("fn absent").extract(&lines).unwrap_err();
        assert_eq!(err, ExtractError::AnchorNotFound { anchor: "fn absent".to_string() });
    }

    #[test]
    fn test_empty_anchor() {
        let err = TrailingRegionExtractor::new("").extract(&[]).unwrap_err();
        assert_eq!(err, ExtractError::EmptyAnchor);
    }
}
