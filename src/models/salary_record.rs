//! Salary record model
//!
//! One teacher's row from one month's paybill, stored together with the header
//! row of the spreadsheet it came from.

use serde::{Deserialize, Serialize};

use crate::extract::resolve::{CellValue, resolve};
use crate::models::period::SalaryPeriod;

/// Identity of a salary record: (period, teacher)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    /// Paybill period
    pub period: SalaryPeriod,
    /// Teacher identifier (Shalarth ID)
    pub teacher_id: String,
}

impl RecordKey {
    /// Create a new record key
    pub fn new(period: SalaryPeriod, teacher_id: impl Into<String>) -> Self {
        Self {
            period,
            teacher_id: teacher_id.into(),
        }
    }
}

/// Immutable raw salary data for one teacher in one month
///
/// `headers[i]` labels `row[i]`. Neither is modified after creation, so
/// records can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    key: RecordKey,
    headers: Vec<String>,
    row: Vec<CellValue>,
}

impl SalaryRecord {
    /// Create a record from the header row and data row of one upload
    pub fn new(
        period: SalaryPeriod,
        teacher_id: impl Into<String>,
        headers: Vec<String>,
        row: Vec<CellValue>,
    ) -> Self {
        Self {
            key: RecordKey::new(period, teacher_id),
            headers,
            row,
        }
    }

    /// Record identifier, e.g. "2024-March-T001"
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.key.period.paybill_id(), self.key.teacher_id)
    }

    /// Identity of the record
    #[must_use]
    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    /// Paybill period
    #[must_use]
    pub fn period(&self) -> SalaryPeriod {
        self.key.period
    }

    /// Teacher identifier
    #[must_use]
    pub fn teacher_id(&self) -> &str {
        &self.key.teacher_id
    }

    /// Verbatim header row of the source spreadsheet
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Verbatim data row of the source spreadsheet
    #[must_use]
    pub fn row(&self) -> &[CellValue] {
        &self.row
    }

    /// Resolve the cell under `expected_header`, `None` when absent
    #[must_use]
    pub fn value(&self, expected_header: &str) -> Option<&CellValue> {
        resolve(&self.headers, &self.row, expected_header)
    }
}
