// crates/block_extractor/src/scanner.rs

use snippet_markers::{DEFAULT_DEDENT_WIDTH, PUBLIC_MARKER};

use crate::brace::count_braces;
use crate::error::ExtractError;
use crate::extraction::{Completion, Extraction};
use crate::transform::{dedent, publicize};

/// Per-line rewriting applied while capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Leading spaces removed from every line after the first.
    pub dedent_width: usize,
    /// Token the first captured line is made to start with.
    pub public_marker: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            dedent_width: DEFAULT_DEDENT_WIDTH,
            public_marker: PUBLIC_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The anchor has not matched yet.
    Searching,
    /// Lines are being captured and the block is still open.
    Capturing,
    /// The block closed. Further lines are ignored.
    Closed,
}

/// Streaming state machine behind [`crate::extract_block`].
///
/// Feed lines in order with [`BlockScanner::push`] and stop once it reports
/// [`ScanState::Closed`]; [`BlockScanner::finish`] hands back what was captured.
#[derive(Debug)]
pub struct BlockScanner {
    anchor: String,
    options: ExtractOptions,
    state: ScanState,
    depth: isize,
    opening_seen: bool,
    captured: Vec<String>,
}

impl BlockScanner {
    pub fn new(anchor: impl Into<String>, options: ExtractOptions) -> Result<Self, ExtractError> {
        let anchor = anchor.into();
        if anchor.is_empty() {
            return Err(ExtractError::EmptyAnchor);
        }
        Ok(Self {
            anchor,
            options,
            state: ScanState::Searching,
            depth: 0,
            opening_seen: false,
            captured: Vec::new(),
        })
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn depth(&self) -> isize {
        self.depth
    }

    pub fn push(&mut self, line: &str) -> ScanState {
        match self.state {
            ScanState::Closed => ScanState::Closed,
            ScanState::Searching => {
                if !line.contains(self.anchor.as_str()) {
                    return ScanState::Searching;
                }
                log::debug!("Anchor '{}' matched: {}", self.anchor, line.trim_end());
                let first = publicize(line, &self.options.public_marker);
                self.capture(first, line)
            }
            ScanState::Capturing => {
                let next = dedent(line, self.options.dedent_width).to_string();
                self.capture(next, line)
            }
        }
    }

    // Braces are counted on the raw line; the transforms only touch leading whitespace.
    fn capture(&mut self, transformed: String, raw: &str) -> ScanState {
        self.captured.push(transformed);
        let braces = count_braces(raw);
        self.depth += braces.net();
        if braces.has_open() {
            self.opening_seen = true;
        }
        self.state = if self.opening_seen && self.depth <= 0 {
            log::debug!(
                "Block for '{}' closed after {} line(s)",
                self.anchor,
                self.captured.len()
            );
            ScanState::Closed
        } else {
            ScanState::Capturing
        };
        self.state
    }

    pub fn finish(self) -> Result<Extraction, ExtractError> {
        let completion = match self.state {
            ScanState::Searching => {
                return Err(ExtractError::AnchorNotFound { anchor: self.anchor });
            }
            ScanState::Capturing => {
                log::debug!(
                    "Input ended with block for '{}' still open at depth {}",
                    self.anchor,
                    self.depth
                );
                Completion::Truncated
            }
            ScanState::Closed => Completion::Closed,
        };
        Ok(Extraction::new(self.anchor, self.captured, completion, self.depth))
    }
}
