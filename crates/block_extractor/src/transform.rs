// crates/block_extractor/src/transform.rs

/// Removes exactly `width` leading spaces when the line starts with at least
/// that many spaces. Tabs and shallower indentation are left untouched.
pub fn dedent(line: &str, width: usize) -> &str {
    let indent = line.bytes().take(width).take_while(|&b| b == b' ').count();
    if indent == width {
        &line[width..]
    } else {
        line
    }
}

/// Strips leading whitespace and prepends `marker` followed by a space, unless
/// the stripped line already starts with `marker`.
pub fn publicize(line: &str, marker: &str) -> String {
    let stripped = line.trim_start();
    if stripped.starts_with(marker) {
        stripped.to_string()
    } else {
        format!("{} {}", marker, stripped)
    }
}
