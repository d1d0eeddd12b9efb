//! Header normalization for tolerant column matching

/// Characters dropped from headers before comparison (besides whitespace)
///
/// U+FEFF is the byte-order mark some exporters put before the first header.
const STRIPPED_PUNCTUATION: [char; 7] = ['.', '_', '-', '/', '(', ')', '\u{feff}'];

/// Normalize a spreadsheet header for matching
///
/// Removes whitespace, byte-order marks, periods, underscores, hyphens,
/// forward slashes and parentheses, then lower-cases what is left. "GIS (ZP)", "gis_zp" and
/// "GIS(ZP)" all normalize to "giszp".
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED_PUNCTUATION.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether two headers are equal after normalization
#[must_use]
pub fn headers_match(a: &str, b: &str) -> bool {
    normalize_header(a) == normalize_header(b)
}
