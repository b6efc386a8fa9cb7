//! `winepath` output handling

/// Last line with content, trimmed; earlier lines may be runtime warnings
pub fn last_non_empty_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(str::to_string)
}
