mod utils;

use chrono::Month;
use payslip_engine::{
    CellValue, PayslipConfig, PayslipEngine, PayslipError, PayslipLookup, SalaryLedger,
    SalaryPeriod, SheetGrid,
};
use rust_decimal_macros::dec;
use utils::{init_logging, march_2024, paybill_grid, paybill_headers, paybill_meta, paybill_row, profile};

fn april_2024() -> SalaryPeriod {
    SalaryPeriod::new(2024, Month::April)
}

fn three_teachers() -> SheetGrid {
    paybill_grid(vec![
        paybill_row(1.0, "T003", "Kiran Jadhav", 42000.0),
        paybill_row(2.0, "T001", "Asha Patil", 30000.0),
        paybill_row(3.0, "T002", "Ravi Shinde", 35000.0),
    ])
}

fn march_ledger() -> SalaryLedger {
    let mut ledger = SalaryLedger::new();
    ledger
        .ingest_paybill(paybill_meta(march_2024()), &three_teachers(), &PayslipConfig::default())
        .unwrap();
    ledger
}

#[test]
fn test_ingest_creates_one_record_per_teacher() {
    init_logging();
    let mut ledger = SalaryLedger::new();
    let summary = ledger
        .ingest_paybill(paybill_meta(march_2024()), &three_teachers(), &PayslipConfig::default())
        .unwrap();

    assert_eq!(summary.paybill_id, "2024-March");
    assert_eq!(summary.records, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(ledger.record_count(), 3);

    let paybills = ledger.paybills();
    assert_eq!(paybills.len(), 1);
    assert_eq!(paybills[0].teacher_count, 3);
    assert_eq!(paybills[0].file_name, "paybill_2024-March.xlsx");

    let record = ledger.get("T001", march_2024()).unwrap();
    assert_eq!(record.id(), "2024-March-T001");
    assert_eq!(record.headers().len(), paybill_headers().len());
    assert_eq!(record.value("basic pay"), Some(&CellValue::Number(30000.0)));
}

#[test]
fn test_same_period_is_rejected() {
    let mut ledger = march_ledger();
    let err = ledger
        .ingest_paybill(paybill_meta(march_2024()), &three_teachers(), &PayslipConfig::default())
        .unwrap_err();
    assert!(matches!(err, PayslipError::DuplicatePeriod(p) if p == march_2024()));
    assert_eq!(ledger.record_count(), 3);
    assert_eq!(ledger.paybills().len(), 1);

    // another month is fine
    ledger
        .ingest_paybill(paybill_meta(april_2024()), &three_teachers(), &PayslipConfig::default())
        .unwrap();
    assert_eq!(ledger.record_count(), 6);
}

#[test]
fn test_identifier_must_sit_in_column_h() {
    let mut headers: Vec<CellValue> = paybill_headers().into_iter().map(CellValue::from).collect();
    headers.swap(6, 7);
    let mut rows = vec![headers];
    rows.push(paybill_row(1.0, "T001", "Asha Patil", 30000.0));
    let grid = SheetGrid::new(rows);

    let mut ledger = SalaryLedger::new();
    let err = ledger
        .ingest_paybill(paybill_meta(march_2024()), &grid, &PayslipConfig::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid sheet format: header 'SHALARTH ID' not found in column H"
    );
    assert_eq!(ledger.record_count(), 0);
    assert!(ledger.paybills().is_empty());

    // searching by header text accepts any column
    let config = PayslipConfig {
        identifier_column: None,
        ..PayslipConfig::default()
    };
    let summary = ledger
        .ingest_paybill(paybill_meta(march_2024()), &grid, &config)
        .unwrap();
    assert_eq!(summary.records, 1);
    // column 6 now carries the identifier header, column 7 the name
    assert!(ledger.get("Asha Patil", march_2024()).is_some());
}

#[test]
fn test_unusable_rows_are_skipped() {
    let mut blank_id = paybill_row(3.0, "", "No Id", 20000.0);
    blank_id[7] = CellValue::Null;
    let grid = paybill_grid(vec![
        paybill_row(1.0, "T001", "Asha Patil", 30000.0),
        vec![CellValue::Number(2.0), CellValue::from("Haveli")],
        blank_id,
        paybill_row(4.0, " T001 ", "Asha Patil", 99999.0),
        paybill_row(5.0, "T002", "Ravi Shinde", 35000.0),
    ]);

    let mut ledger = SalaryLedger::new();
    let summary = ledger
        .ingest_paybill(paybill_meta(march_2024()), &grid, &PayslipConfig::default())
        .unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.skipped, 3);

    // the first row for a repeated identifier is kept
    let record = ledger.get("T001", march_2024()).unwrap();
    assert_eq!(record.value("BASIC PAY"), Some(&CellValue::Number(30000.0)));
}

#[test]
fn test_grids_without_teachers_are_rejected() {
    let config = PayslipConfig::default();
    let mut ledger = SalaryLedger::new();

    let empty = SheetGrid::new(Vec::new());
    assert!(matches!(
        ledger.ingest_paybill(paybill_meta(march_2024()), &empty, &config),
        Err(PayslipError::EmptySheet)
    ));

    let header_only = paybill_grid(Vec::new());
    assert!(matches!(
        ledger.ingest_paybill(paybill_meta(march_2024()), &header_only, &config),
        Err(PayslipError::NoDataRows)
    ));

    let mut nobody = paybill_row(1.0, "", "Nobody", 1.0);
    nobody[7] = CellValue::from("   ");
    let no_teachers = paybill_grid(vec![nobody]);
    assert!(matches!(
        ledger.ingest_paybill(paybill_meta(march_2024()), &no_teachers, &config),
        Err(PayslipError::NoTeacherRows)
    ));

    assert!(!ledger.has_period(march_2024()));
}

#[test]
fn test_lookup_reports_missing_month() {
    let ledger = march_ledger();
    let config = PayslipConfig::default().with_admin_contact("98220 12345");

    let found = ledger.lookup("T002", march_2024(), &config);
    assert!(found.is_found());
    assert_eq!(found.record().unwrap().teacher_id(), "T002");

    match ledger.lookup("T002", april_2024(), &config) {
        PayslipLookup::NotFound { period, message } => {
            assert_eq!(period, april_2024());
            assert_eq!(
                message,
                "Payslip data for April 2024 is not available for your Shalarth ID. \
                 Please contact Admin at 98220 12345."
            );
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    assert!(ledger.lookup("T999", march_2024(), &config).record().is_none());
    assert_eq!(PayslipLookup::default(), PayslipLookup::NotSearched);
}

#[test]
fn test_delete_allows_reupload() {
    let mut ledger = march_ledger();
    ledger
        .ingest_paybill(paybill_meta(april_2024()), &three_teachers(), &PayslipConfig::default())
        .unwrap();

    let deleted = ledger.delete_paybill("2024-March").unwrap();
    assert_eq!(deleted.period, march_2024());
    assert_eq!(ledger.record_count(), 3);
    assert!(!ledger.has_period(march_2024()));
    assert!(ledger.has_period(april_2024()));

    assert!(matches!(
        ledger.delete_paybill("2024-March"),
        Err(PayslipError::UnknownPaybill(id)) if id == "2024-March"
    ));

    ledger
        .ingest_paybill(paybill_meta(march_2024()), &three_teachers(), &PayslipConfig::default())
        .unwrap();
    assert_eq!(ledger.record_count(), 6);
}

#[test]
fn test_teacher_history_is_chronological() {
    let mut ledger = SalaryLedger::new();
    let config = PayslipConfig::default();
    for period in [april_2024(), SalaryPeriod::new(2023, Month::December), march_2024()] {
        ledger
            .ingest_paybill(paybill_meta(period), &three_teachers(), &config)
            .unwrap();
    }
    let months: Vec<String> = ledger
        .records_for_teacher("T001")
        .iter()
        .map(|r| r.period().to_string())
        .collect();
    assert_eq!(months, vec!["December 2023", "March 2024", "April 2024"]);
}

#[test]
fn test_period_payslips_are_sorted_by_teacher() {
    init_logging();
    let ledger = march_ledger();
    let engine = PayslipEngine::default();
    let profiles = vec![profile("T002", "Ravi Shinde")];

    let payslips = ledger.payslips_for_period(&engine, march_2024(), &profiles);
    let ids: Vec<&str> = payslips.iter().map(|p| p.teacher_id.as_str()).collect();
    assert_eq!(ids, vec!["T001", "T002", "T003"]);

    let first = &payslips[0];
    assert_eq!(first.sections.emoluments.total, dec!(45000));
    assert_eq!(first.sections.govt_recoveries.total, dec!(2200));
    assert!(first.sections.non_govt_recoveries.is_empty());
    assert_eq!(first.net_pay, dec!(42800));
    assert_eq!(first.net_pay_words, "Forty Two Thousand Eight Hundred");

    assert!(ledger.payslips_for_period(&engine, april_2024(), &profiles).is_empty());
}

#[test]
fn test_snapshot_round_trip() {
    let ledger = march_ledger();
    let json = ledger.to_json_string().unwrap();
    let restored = SalaryLedger::from_json_str(&json).unwrap();

    assert_eq!(restored.record_count(), 3);
    assert_eq!(restored.paybills(), ledger.paybills());
    assert_eq!(
        restored.get("T003", march_2024()),
        ledger.get("T003", march_2024())
    );

    assert!(matches!(
        SalaryLedger::from_json_str("{\"paybills\": 3}"),
        Err(PayslipError::Json(_))
    ));
}
