//! Input line parsing.

/// Split a raw input line into a command token and its arguments.
///
/// The line is trimmed, then split on single spaces. There is no quoting:
/// consecutive spaces produce empty arguments, and a name or phone cannot
/// contain a space.
pub fn parse_input(line: &str) -> (&str, Vec<&str>) {
    let mut parts = line.trim().split(' ');
    let command = parts.next().unwrap_or_default();
    (command, parts.collect())
}
