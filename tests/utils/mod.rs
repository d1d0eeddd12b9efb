//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::Month;
use payslip_engine::{CellValue, PaybillMeta, SalaryPeriod, SalaryRecord, SheetGrid, TeacherProfile};

/// Route library logs through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[must_use]
pub fn march_2024() -> SalaryPeriod {
    SalaryPeriod::new(2024, Month::March)
}

/// Build a cell from a JSON-like literal: `None` is null, text otherwise
#[must_use]
pub fn cell(value: Option<&str>) -> CellValue {
    CellValue::from(value)
}

/// Record with text cells, `None` for null
#[must_use]
pub fn record(period: SalaryPeriod, teacher_id: &str, headers: &[&str], row: &[Option<&str>]) -> SalaryRecord {
    SalaryRecord::new(
        period,
        teacher_id,
        headers.iter().map(ToString::to_string).collect(),
        row.iter().copied().map(cell).collect(),
    )
}

/// The worked example from the payroll office: two emoluments, one recovery,
/// and a net salary column left blank
#[must_use]
pub fn scenario_record() -> SalaryRecord {
    record(
        march_2024(),
        "T001",
        &["SHALARTH ID", "BASIC PAY", "D.A", "GPF", "EMPLOYEE NET SALARY"],
        &[Some("T001"), Some("30000"), Some("5000"), Some("1800"), None],
    )
}

#[must_use]
pub fn profile(id: &str, name: &str) -> TeacherProfile {
    TeacherProfile::new(id, name, "9800000000")
}

/// Header row of a district paybill with the identifier in column H
#[must_use]
pub fn paybill_headers() -> Vec<&'static str> {
    vec![
        "SR.NO",
        "BLOCK / TALUKA",
        "NAME OF SCHOOL",
        "SCHOOL UDISE CODE",
        "SCHOOL SHALARTH DDO CODE",
        "S.R NO OF EMPL",
        "EMPLOYEE NAME",
        "SHALARTH ID",
        "BASIC PAY",
        "D.A",
        "HRA",
        "GPF",
        "PT",
        "INCOME TAX",
        "EMPLOYEE NET SALARY",
    ]
}

/// A teacher row matching `paybill_headers`
#[must_use]
pub fn paybill_row(sr: f64, id: &str, name: &str, basic: f64) -> Vec<CellValue> {
    vec![
        CellValue::Number(sr),
        CellValue::from("Haveli"),
        CellValue::from("ZP School Wagholi"),
        CellValue::from("27250100101"),
        CellValue::from("2725000123"),
        CellValue::Number(sr),
        CellValue::from(name),
        CellValue::from(id),
        CellValue::Number(basic),
        CellValue::Number(basic * 0.5),
        CellValue::Null,
        CellValue::from("2,000"),
        CellValue::Number(200.0),
        CellValue::from("0.00"),
        CellValue::Number(basic * 1.5 - 2200.0),
    ]
}

/// Grid with a header row and the given data rows
#[must_use]
pub fn paybill_grid(rows: Vec<Vec<CellValue>>) -> SheetGrid {
    let mut grid = vec![paybill_headers().into_iter().map(CellValue::from).collect()];
    grid.extend(rows);
    SheetGrid::new(grid)
}

#[must_use]
pub fn paybill_meta(period: SalaryPeriod) -> PaybillMeta {
    PaybillMeta {
        period,
        remarks: "Regular salary".to_string(),
        file_name: format!("paybill_{}.xlsx", period.paybill_id()),
    }
}
