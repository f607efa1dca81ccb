// crates/block_extractor/src/brace.rs

use snippet_markers::{CLOSE_BRACE, OPEN_BRACE};

/// Number of opening and closing braces found on a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceCount {
    pub open: usize,
    pub close: usize,
}

impl BraceCount {
    /// Contribution of the line to the running depth.
    pub fn net(&self) -> isize {
        self.open as isize - self.close as isize
    }

    pub fn has_open(&self) -> bool {
        self.open > 0
    }
}

/// Counts every brace character on the line, including those inside string
/// literals and comments.
pub fn count_braces(line: &str) -> BraceCount {
    line.chars().fold(BraceCount::default(), |mut count, ch| {
        match ch {
            OPEN_BRACE => count.open += 1,
            CLOSE_BRACE => count.close += 1,
            _ => {}
        }
        count
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_multiple_braces_per_line() {
        let count = count_braces("match x { Some(v) => { v } None => {} }");
        assert_eq!(count, BraceCount { open: 3, close: 3 });
        assert_eq!(count.net(), 0);
    }

    #[test]
    fn test_closing_heavy_line_goes_negative() {
        let count = count_braces("    } }");
        assert_eq!(count.net(), -2);
        assert!(!count.has_open());
    }

    #[test]
    fn test_braces_in_string_literals_are_counted() {
        // No literal awareness: the brace inside the string is a real brace.
        let count = count_braces(r#"    println!("{");"#);
        assert_eq!(count, BraceCount { open: 1, close: 0 });
    }

    #[test]
    fn test_line_without_braces() {
        assert_eq!(count_braces("let x = 1;\n"), BraceCount::default());
    }
}
