//! Error handling for the payslip engine.
//!
//! Field-level problems (missing columns, malformed numbers) are never errors;
//! they resolve to absent values or zero. The variants below cover configuration
//! bugs in the descriptor table and rejections at the ingestion boundary.

use crate::models::period::SalaryPeriod;

/// Specialized error type for the payslip engine
#[derive(Debug, thiserror::Error)]
pub enum PayslipError {
    /// The descriptor table failed validation at load time
    #[error("Invalid field table: {0}")]
    InvalidFieldTable(String),

    /// No summary descriptor carries the configured net pay label
    #[error("Field table has no summary field labelled '{0}' for net pay")]
    MissingNetPayField(String),

    /// Year or month could not be parsed into a salary period
    #[error("Invalid salary period: {0}")]
    InvalidPeriod(String),

    /// A paybill (or its salary records) already exists for the period
    #[error("Salary data for {0} has already been processed. Delete the existing paybill to re-upload")]
    DuplicatePeriod(SalaryPeriod),

    /// The uploaded grid has no header row
    #[error("Spreadsheet is empty: expected a header row")]
    EmptySheet,

    /// The identifier header is not where it is expected
    #[error("Invalid sheet format: header '{header}' not found{}", column_hint(.column))]
    MissingIdentifierHeader {
        /// Expected header text
        header: String,
        /// Fixed column the header was expected in, if any
        column: Option<usize>,
    },

    /// Header row present, but nothing below it
    #[error("Spreadsheet has a header row but no data rows")]
    NoDataRows,

    /// Every data row was skipped
    #[error("No valid teacher rows found in the spreadsheet")]
    NoTeacherRows,

    /// Deletion requested for a paybill that does not exist
    #[error("Unknown paybill: {0}")]
    UnknownPaybill(String),

    /// Snapshot or config (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn column_hint(column: &Option<usize>) -> String {
    column.map_or_else(String::new, |c| format!(" in column {}", column_letter(c)))
}

/// Spreadsheet-style column letter for a zero-based index (0 -> A, 7 -> H, 26 -> AA)
#[must_use]
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Result type for payslip engine operations
pub type Result<T> = std::result::Result<T, PayslipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(7), "H");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(68), "BQ");
    }

    #[test]
    fn test_missing_identifier_message() {
        let err = PayslipError::MissingIdentifierHeader {
            header: "SHALARTH ID".to_string(),
            column: Some(7),
        };
        assert_eq!(
            err.to_string(),
            "Invalid sheet format: header 'SHALARTH ID' not found in column H"
        );
    }
}
