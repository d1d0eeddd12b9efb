//! Default payslip field table
//!
//! This module is the single source of truth for the monthly paybill layout:
//! which spreadsheet headers are read, which payslip section each one lands in,
//! and in what order the lines are printed. Declaration order within a category
//! is the display order.

use crate::payslip_fields;
use crate::schema::FieldDescriptor;

/// Label of the summary column holding the authoritative net pay
pub const NET_SALARY_LABEL: &str = "EMPLOYEE NET SALARY";

/// Label of the employee identifier column
pub const SHALARTH_ID_LABEL: &str = "SHALARTH ID";

/// Header lines printed on the payslip, in display order
pub const DISPLAYED_HEADER_FIELDS: [&str; 14] = [
    "NAME OF SCHOOL",
    "SCHOOL SHALARTH DDO CODE",
    "EMPLOYEE NAME",
    "SHALARTH ID",
    "GPF NO",
    "PAN NO",
    "PRAN NO",
    "ADHAR NO",
    "EMAIL ID",
    "MOB NO",
    "BANK ACCOUNT NUMBER",
    "PAY MATRIX",
    "BANK IFSC CODE",
    "BRANCH NAME",
];

/// The built-in descriptor table for the district paybill format
#[must_use]
pub fn default_payslip_fields() -> Vec<FieldDescriptor> {
    payslip_fields![
        // Header information
        HeaderInfo "NAME OF SCHOOL",
        HeaderInfo "SCHOOL SHALARTH DDO CODE" => SchoolDdoCode,
        HeaderInfo "EMPLOYEE NAME" => Name,
        HeaderInfo "SHALARTH ID" => ShalarthId,
        SummaryField "DESIGNATION" => Designation,
        HeaderInfo "GPF NO" => GpfNo,
        HeaderInfo "PAN NO" => PanNo,
        HeaderInfo "PRAN NO" => PranNo,
        HeaderInfo "ADHAR NO" => AdharNo,
        HeaderInfo "EMAIL ID" => EmailId,
        HeaderInfo "MOB NO" => Mobile,
        HeaderInfo "BANK ACCOUNT NUMBER",
        HeaderInfo "BANK IFSC CODE" => BankIfscCode,
        HeaderInfo "BRANCH NAME" => BranchName,
        HeaderInfo "PAY MATRIX" => PayMatrix,

        // Present in the sheet, not printed in the header block
        SummaryField "SR.NO",
        HeaderInfo "BLOCK / TALUKA",
        HeaderInfo "SCHOOL UDISE CODE",
        SummaryField "S.R NO OF EMPL",
        HeaderInfo "GENDER M/F",
        SummaryField "DCPS NO",
        SummaryField "DDO BANK NAME",
        SummaryField "DDO BANK ACCOUNT NUMBER",
        SummaryField "DDO BANK IFSC CODE",
        HeaderInfo "BANK NAME",

        // Emoluments
        Emolument "BASIC PAY",
        Emolument "D.A",
        Emolument "HRA",
        Emolument "T.A",
        Emolument "T.A ARREAR",
        Emolument "TRIBAL ALLOWANCE",
        Emolument "WASHING ALLOWANCE",
        Emolument "DA ARREARS",
        Emolument "BASIC ARREARS",
        Emolument "CLA",
        Emolument "NPS EMPR ALLOW",

        // Sheet totals, never itemized
        SummaryField "TOTAL PAY" [currency],
        SummaryField "GROSS AFTER DEDUCTING FA" [currency],
        SummaryField "NPS TOTAL" [currency],
        SummaryField "NGR(TOTAL DEDUCTIONS)" [currency],

        // Govt. recoveries
        GovtRecovery "NPS EMPR CONTRI",
        GovtRecovery "NPS EMP CONTRI",
        GovtRecovery "NPS EMPR CONTRI ARR",
        GovtRecovery "NPS EMP CONTRI ARR",
        GovtRecovery "GPF",
        GovtRecovery "GPF ADV",
        GovtRecovery "PT",
        GovtRecovery "GIS(ZP)",
        GovtRecovery "GIS SCOUT",
        GovtRecovery "DCPS REGULAR",
        GovtRecovery "DCPS DELAYED",
        GovtRecovery "DCPS PAY ARREARS RECOVERY",
        GovtRecovery "REVENUE STAMP",
        GovtRecovery "DCPS DA ARREARS RECOVERY",
        GovtRecovery "GROUP ACCIDENTAL POLICY",
        GovtRecovery "NAA",
        GovtRecovery "F A",

        SummaryField "TOTAL GOVT DEDUCTIONS" [currency],
        SummaryField "GROSS PAYMENT AFTER GOVT DEDUCTIONS" [currency],
        SummaryField "GROSS PAYMENT AFTER NPS DEDUCTIONS" [currency],

        // Non govt. recoveries
        NonGovtRecovery "INCOME TAX",
        NonGovtRecovery "CO-OP BANK",
        NonGovtRecovery "NGR(LIC)",
        NonGovtRecovery "NGR(SOCIETY LOAN)",
        NonGovtRecovery "NGR(MISC)",
        NonGovtRecovery "NGR(OTHER RECOVERY)",
        NonGovtRecovery "NGR(RD)",
        NonGovtRecovery "NGR(OTHER DEDUCTION)",

        // Authoritative net pay
        SummaryField "EMPLOYEE NET SALARY" [currency],
    ]
}
