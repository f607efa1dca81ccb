// crates/block_extractor/src/extraction.rs

use crate::error::ExtractError;

/// How a capture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The closing condition was reached.
    Closed,
    /// Input ran out while the block was still open.
    Truncated,
}

/// Lines captured for an anchor, in source order, after transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    anchor: String,
    lines: Vec<String>,
    completion: Completion,
    depth: isize,
}

impl Extraction {
    pub(crate) fn new(anchor: String, lines: Vec<String>, completion: Completion, depth: isize) -> Self {
        Self { anchor, lines, completion, depth }
    }

    /// Builds a closed extraction for extractors that have no depth to track.
    pub fn closed(anchor: impl Into<String>, lines: Vec<String>) -> Self {
        Self::new(anchor.into(), lines, Completion::Closed, 0)
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn is_truncated(&self) -> bool {
        self.completion == Completion::Truncated
    }

    /// Brace depth when capture stopped. At most zero for a closed block.
    pub fn depth(&self) -> isize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenates the captured lines. Terminators are kept from the input.
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// Returns the lines, or `UnterminatedBlock` if the block never closed.
    pub fn into_closed(self) -> Result<Vec<String>, ExtractError> {
        match self.completion {
            Completion::Closed => Ok(self.lines),
            Completion::Truncated => Err(ExtractError::UnterminatedBlock {
                anchor: self.anchor,
                captured: self.lines.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_closed_passes_closed_lines_through() {
        let extraction = Extraction::closed("fn a", vec!["pub fn a() {}\n".to_string()]);
        assert_eq!(extraction.into_closed().unwrap(), vec!["pub fn a() {}\n".to_string()]);
    }

    #[test]
    fn test_into_closed_rejects_truncation() {
        let extraction = Extraction::new(
            "fn a".to_string(),
            vec!["pub fn a() {\n".to_string(), "x\n".to_string()],
            Completion::Truncated,
            1,
        );
        let err = extraction.into_closed().unwrap_err();
        assert_eq!(
            err,
            ExtractError::UnterminatedBlock { anchor: "fn a".to_string(), captured: 2 }
        );
        assert!(err.to_string().contains("never closes"));
    }

    #[test]
    fn test_text_joins_lines_verbatim() {
        let extraction = Extraction::closed("x", vec!["a\n".to_string(), "b\n".to_string()]);
        assert_eq!(extraction.text(), "a\nb\n");
        assert_eq!(extraction.len(), 2);
    }
}
