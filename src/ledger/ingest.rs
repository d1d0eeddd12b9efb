//! Paybill ingestion
//!
//! Turns the cell grid of an uploaded paybill into one salary record per
//! teacher. Parsing the workbook itself is the caller's business; this module
//! starts from the grid the sheet parser produces (first row headers, one row
//! per employee).

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::PayslipConfig;
use crate::error::{PayslipError, Result, column_letter};
use crate::extract::resolve::{CellValue, find_header_index};
use crate::models::{SalaryPeriod, SalaryRecord};
use crate::utils::logging::log_warning;

/// Raw cell grid of the first worksheet of an upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Wrap a grid of rows; row 0 is the header row
    #[must_use]
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Header row as text, blank cells as empty strings
    #[must_use]
    pub fn headers(&self) -> Option<Vec<String>> {
        self.rows
            .first()
            .map(|row| row.iter().map(ToString::to_string).collect())
    }

    /// Data rows below the header
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of rows including the header
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Upload form details accompanying a paybill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaybillMeta {
    pub period: SalaryPeriod,
    pub remarks: String,
    pub file_name: String,
}

/// Master entry of an ingested paybill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paybill {
    /// "{year}-{Month}"
    pub id: String,
    pub period: SalaryPeriod,
    pub remarks: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    /// Number of salary records created from the upload
    pub teacher_count: usize,
}

/// Outcome of a successful ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    /// Id of the paybill master entry
    pub paybill_id: String,
    /// Records created
    pub records: usize,
    /// Data rows skipped (too short, blank or repeated identifier)
    pub skipped: usize,
}

/// Column of the identifier, validated against the header row
fn identifier_index(headers: &[String], config: &PayslipConfig) -> Result<usize> {
    let missing = || PayslipError::MissingIdentifierHeader {
        header: config.identifier_header.clone(),
        column: config.identifier_column,
    };
    match config.identifier_column {
        Some(column) => {
            let found = headers
                .get(column)
                .is_some_and(|h| h.trim().eq_ignore_ascii_case(config.identifier_header.trim()));
            if found { Ok(column) } else { Err(missing()) }
        }
        None => find_header_index(headers, &config.identifier_header).ok_or_else(missing),
    }
}

/// Split a grid into per-teacher salary records
///
/// Rows too short to reach the identifier column, rows with a blank identifier
/// and repeats of an identifier already seen are skipped with a warning.
pub(crate) fn records_from_grid(
    grid: &SheetGrid,
    period: SalaryPeriod,
    config: &PayslipConfig,
) -> Result<(Vec<SalaryRecord>, usize)> {
    let headers = grid.headers().ok_or(PayslipError::EmptySheet)?;
    let id_column = identifier_index(&headers, config)?;

    let data_rows = grid.data_rows();
    if data_rows.is_empty() {
        return Err(PayslipError::NoDataRows);
    }

    let mut seen = FxHashSet::default();
    let mut records = Vec::with_capacity(data_rows.len());
    let mut skipped = 0usize;

    for (i, row) in data_rows.iter().enumerate() {
        // sheet row number as shown by spreadsheet tools (header is row 1)
        let sheet_row = i + 2;
        let Some(cell) = row.get(id_column) else {
            log_warning(
                &format!(
                    "Skipping row {sheet_row}: no {} column",
                    column_letter(id_column)
                ),
                Some(period),
            );
            skipped += 1;
            continue;
        };
        let Some(teacher_id) = cell.as_text().map(|id| id.trim().to_string()) else {
            log_warning(
                &format!("Skipping row {sheet_row}: missing {}", config.identifier_header),
                Some(period),
            );
            skipped += 1;
            continue;
        };
        if !seen.insert(teacher_id.clone()) {
            log_warning(
                &format!("Skipping row {sheet_row}: {teacher_id} already appears above"),
                Some(period),
            );
            skipped += 1;
            continue;
        }
        records.push(SalaryRecord::new(
            period,
            teacher_id,
            headers.clone(),
            row.clone(),
        ));
    }

    if records.is_empty() {
        return Err(PayslipError::NoTeacherRows);
    }
    Ok((records, skipped))
}
