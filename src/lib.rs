//! A Rust library for turning monthly paybill spreadsheets into teacher
//! payslips: header-driven field extraction, section aggregation, net pay in
//! words and a fixed-layout statement renderer.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod extract;
pub mod ledger;
pub mod models;
pub mod payslip;
pub mod schema;
pub mod utils;
pub mod words;

// Re-export the most common types for easier use
// Core types
pub use config::PayslipConfig;
pub use error::{PayslipError, Result};
pub use models::{RecordKey, SalaryPeriod, SalaryRecord, TeacherProfile};
pub use schema::{FieldCategory, FieldDescriptor, FieldTable, ProfileField};

// Extraction and aggregation
pub use aggregate::{ResolvedField, Section, SectionEntry, SectionTotals, aggregate};
pub use extract::{CellValue, normalize_header, resolve, to_amount};
pub use words::amount_to_words;

// Payslips and storage
pub use ledger::{IngestSummary, Paybill, PaybillMeta, PayslipLookup, SalaryLedger, SheetGrid};
pub use payslip::{HeaderField, HeaderValue, Payslip, PayslipEngine, format_amount, render_text};
