/// Extracts the label from a header line.
///
/// A header is optional leading whitespace, a `#`, optional whitespace, and
/// then the label. Whatever follows the whitespace after `#` is returned as-is,
/// trailing whitespace included. Returns `None` for data lines.
pub fn parse_header(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix('#').map(str::trim_start)
}
