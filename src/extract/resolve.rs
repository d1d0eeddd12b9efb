//! Row value resolution by header text
//!
//! Spreadsheets from different months carry different column sets and orders,
//! so values are located by normalized header text, never by position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extract::normalize::normalize_header;

/// A single spreadsheet cell as handed over by the sheet parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell
    Number(f64),
    /// Text cell (also used for formatted numbers such as "₹ 1,234.50")
    Text(String),
    /// Empty cell
    #[default]
    Null,
}

impl CellValue {
    /// Whether the cell carries no usable content (null or whitespace only)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(n) => n.is_nan(),
        }
    }

    /// Text form of the cell, or `None` when blank
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// Index of the first header matching `expected` after normalization
#[must_use]
pub fn find_header_index<S: AsRef<str>>(headers: &[S], expected: &str) -> Option<usize> {
    let target = normalize_header(expected);
    if target.is_empty() {
        return None;
    }
    headers
        .iter()
        .position(|h| normalize_header(h.as_ref()) == target)
}

/// Resolve the cell under `expected_header` in `row`
///
/// Returns `None` ("absent") when no header matches, when the row is shorter
/// than the matched column, or when the cell is null or blank. When several
/// headers normalize to the same text the first one wins.
#[must_use]
pub fn resolve<'a, S: AsRef<str>>(
    headers: &[S],
    row: &'a [CellValue],
    expected_header: &str,
) -> Option<&'a CellValue> {
    let index = find_header_index(headers, expected_header)?;
    row.get(index).filter(|cell| !cell.is_blank())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<&'static str> {
        vec!["SHALARTH ID", "Basic Pay", "D.A", "GIS (ZP)", "REMARKS"]
    }

    #[test]
    fn test_resolve_by_normalized_header() {
        let row = vec![
            CellValue::from("T001"),
            CellValue::from(30000.0),
            CellValue::from("5,000"),
            CellValue::from("60"),
            CellValue::Null,
        ];

        assert_eq!(resolve(&headers(), &row, "BASIC PAY"), Some(&CellValue::Number(30000.0)));
        assert_eq!(resolve(&headers(), &row, "D.A"), Some(&CellValue::from("5,000")));
        assert_eq!(resolve(&headers(), &row, "GIS(ZP)"), Some(&CellValue::from("60")));
    }

    #[test]
    fn test_resolve_absent_cases() {
        let row = vec![
            CellValue::from("T001"),
            CellValue::from("   "),
            CellValue::Null,
        ];

        // blank text, null cell, row shorter than headers, unknown header
        assert_eq!(resolve(&headers(), &row, "BASIC PAY"), None);
        assert_eq!(resolve(&headers(), &row, "D.A"), None);
        assert_eq!(resolve(&headers(), &row, "GIS(ZP)"), None);
        assert_eq!(resolve(&headers(), &row, "HRA"), None);
        assert_eq!(resolve(&headers(), &row, ""), None);
    }

    #[test]
    fn test_first_duplicate_header_wins() {
        let headers = ["GPF", "G.P.F"];
        let row = vec![CellValue::from("100"), CellValue::from("200")];
        assert_eq!(resolve(&headers, &row, "gpf"), Some(&CellValue::from("100")));
    }

    #[test]
    fn test_cell_value_from_json() {
        let row: Vec<CellValue> = serde_json::from_str(r#"["T001", 30000, null, 12.5]"#).unwrap();
        assert_eq!(
            row,
            vec![
                CellValue::from("T001"),
                CellValue::Number(30000.0),
                CellValue::Null,
                CellValue::Number(12.5),
            ]
        );
        assert_eq!(row[1].to_string(), "30000");
    }
}
