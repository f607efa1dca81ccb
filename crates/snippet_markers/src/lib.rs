// crates/snippet_markers/src/lib.rs

//! Shared tokens and defaults used throughout the snippet extraction tool‑chain.

/// Token prepended to the first line of an extracted block so the
/// declaration stays visible once it is lifted out of its `impl`.
pub const PUBLIC_MARKER: &str = "pub";

/// Indentation removed from every line after the block's first line.
pub const DEFAULT_DEDENT_WIDTH: usize = 4;

pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Anchor of the function lifted out as a standalone block.
pub const DEFAULT_FUNCTION_ANCHOR: &str = "fn should_build_sequence";

/// Anchor from which everything up to end of file is copied.
pub const DEFAULT_TRAILING_ANCHOR: &str = "fn build_sequence";

/// Lines starting with this prefix (after trimming) are dropped from the trailing region.
pub const IMPORT_PREFIX: &str = "use ";

/// Namespaced macro path rewritten in the trailing region, and its replacement.
pub const NAMESPACED_MACRO: &str = "bitflags::bitflags!";
pub const LOCAL_MACRO: &str = "bitflags!";

pub const DEFAULT_SOURCE_PATH: &str = "source/keyboard.rs";
pub const DEFAULT_OUTPUT_PATH: &str = "alacritty_test/alacritty_extracted.rs";

/// Lines written ahead of the extracted code. Each one carries its own terminator.
pub const PREAMBLE: &[&str] = &[
    "// Extracted logic from Alacritty's keyboard.rs\n",
    "use std::borrow::Cow;\n",
    "use crate::alacritty_mocks::*;\n\n",
];
