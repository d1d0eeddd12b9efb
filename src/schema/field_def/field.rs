//! Field descriptors for the payslip schema
//!
//! A descriptor maps one canonical payslip label to the spreadsheet header it is
//! read from, the payslip section it belongs to, and optionally a teacher profile
//! value to fall back on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payslip section a field is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldCategory {
    /// Identity, school and bank details printed above the sections
    HeaderInfo,
    /// Earnings
    Emolument,
    /// Government deductions (GPF, NPS, PT, ...)
    GovtRecovery,
    /// Non-government deductions (income tax, loans, ...)
    NonGovtRecovery,
    /// Present in the sheet but not itemized (totals, net salary, bookkeeping columns)
    SummaryField,
}

impl FieldCategory {
    /// Whether fields of this category are itemized and summed into a section
    #[must_use]
    pub fn is_section(&self) -> bool {
        matches!(
            self,
            FieldCategory::Emolument | FieldCategory::GovtRecovery | FieldCategory::NonGovtRecovery
        )
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldCategory::HeaderInfo => write!(f, "Header"),
            FieldCategory::Emolument => write!(f, "Emoluments"),
            FieldCategory::GovtRecovery => write!(f, "Govt. Recoveries"),
            FieldCategory::NonGovtRecovery => write!(f, "Non Govt. Recoveries"),
            FieldCategory::SummaryField => write!(f, "Summary"),
        }
    }
}

/// Teacher profile value a header field can fall back on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    ShalarthId,
    Mobile,
    EmailId,
    GpfNo,
    PanNo,
    PranNo,
    AdharNo,
    BankIfscCode,
    BranchName,
    PayMatrix,
    SchoolDdoCode,
    Designation,
}

/// Static rule mapping a payslip label to a spreadsheet header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Label printed on the payslip
    pub label: String,
    /// Header text expected in the uploaded spreadsheet
    pub expected_header: String,
    /// Section the field belongs to
    pub category: FieldCategory,
    /// Whether the value is a monetary amount
    pub is_currency: bool,
    /// Profile value used when the spreadsheet has none
    pub profile_field: Option<ProfileField>,
}

impl FieldDescriptor {
    /// Create a descriptor whose expected header equals its label
    pub fn new(label: impl Into<String>, category: FieldCategory) -> Self {
        let label = label.into();
        Self {
            expected_header: label.clone(),
            label,
            category,
            is_currency: category.is_section(),
            profile_field: None,
        }
    }

    /// Shorthand for a header-info descriptor
    pub fn header(label: impl Into<String>) -> Self {
        Self::new(label, FieldCategory::HeaderInfo)
    }

    /// Shorthand for a monetary descriptor in the given category
    pub fn amount(label: impl Into<String>, category: FieldCategory) -> Self {
        Self::new(label, category).currency(true)
    }

    /// Read the value from a differently worded header
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.expected_header = header.into();
        self
    }

    /// Set the currency flag
    #[must_use]
    pub fn currency(mut self, is_currency: bool) -> Self {
        self.is_currency = is_currency;
        self
    }

    /// Fall back on a teacher profile value when the sheet has none
    #[must_use]
    pub fn with_profile_field(mut self, field: ProfileField) -> Self {
        self.profile_field = Some(field);
        self
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, self.category)
    }
}
