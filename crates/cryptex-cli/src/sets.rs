//! Parsing of the `--sets` argument.

/// Split a comma separated list of character sets.
///
/// Empty entries are kept so that the core rejects them instead of silently
/// dropping a wheel.
pub fn parse_sets(s: &str) -> Vec<String> {
    s.split(',').map(str::to_string).collect()
}
