//! Section aggregation
//!
//! Partitions the monetary fields of a salary record into the three payslip
//! sections, drops zero-valued lines and totals each section. Net pay is never
//! derived here; it is read from its own summary column.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::extract::coerce::to_amount;
use crate::extract::resolve::CellValue;
use crate::models::SalaryRecord;
use crate::schema::{FieldCategory, FieldDescriptor};

/// A descriptor resolved against one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedField {
    /// Payslip label
    pub label: String,
    /// Section of the descriptor
    pub category: FieldCategory,
    /// Raw cell, `None` when absent
    pub value: Option<CellValue>,
}

impl ResolvedField {
    /// Resolve `descriptor` against `record`
    #[must_use]
    pub fn resolve(descriptor: &FieldDescriptor, record: &SalaryRecord) -> Self {
        let value = record.value(&descriptor.expected_header).cloned();
        if value.is_none() {
            debug!(
                "Field '{}' not provided for {}",
                descriptor.label,
                record.id()
            );
        }
        Self {
            label: descriptor.label.clone(),
            category: descriptor.category,
            value,
        }
    }

    /// Coerced amount of the raw value
    #[must_use]
    pub fn amount(&self) -> Decimal {
        to_amount(self.value.as_ref())
    }
}

/// One printed line of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// The field the line was resolved from
    pub field: ResolvedField,
    /// Its non-zero amount
    pub amount: Decimal,
}

impl SectionEntry {
    /// Payslip label of the line
    #[must_use]
    pub fn label(&self) -> &str {
        &self.field.label
    }
}

/// Ordered non-zero lines of one section and their total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Lines in descriptor declaration order
    pub entries: Vec<SectionEntry>,
    /// Full-precision sum of the lines
    pub total: Decimal,
}

impl Section {
    /// Add a line; a line that would overflow the total is dropped with a warning
    fn push(&mut self, entry: SectionEntry) {
        match self.total.checked_add(entry.amount) {
            Some(total) => {
                self.total = total;
                self.entries.push(entry);
            }
            None => warn!(
                "Dropping '{}' ({}): section total would overflow",
                entry.label(),
                entry.amount
            ),
        }
    }

    /// Number of printed lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no line survived zero filtering
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Amount of a line by label, `None` when the line was not printed
    #[must_use]
    pub fn amount_of(&self, label: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.label() == label)
            .map(|e| e.amount)
    }
}

/// The three payslip sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTotals {
    pub emoluments: Section,
    pub govt_recoveries: Section,
    pub non_govt_recoveries: Section,
}

impl SectionTotals {
    /// Section for a category; `None` for header and summary fields
    #[must_use]
    pub fn section(&self, category: FieldCategory) -> Option<&Section> {
        match category {
            FieldCategory::Emolument => Some(&self.emoluments),
            FieldCategory::GovtRecovery => Some(&self.govt_recoveries),
            FieldCategory::NonGovtRecovery => Some(&self.non_govt_recoveries),
            FieldCategory::HeaderInfo | FieldCategory::SummaryField => None,
        }
    }

    fn section_mut(&mut self, category: FieldCategory) -> Option<&mut Section> {
        match category {
            FieldCategory::Emolument => Some(&mut self.emoluments),
            FieldCategory::GovtRecovery => Some(&mut self.govt_recoveries),
            FieldCategory::NonGovtRecovery => Some(&mut self.non_govt_recoveries),
            FieldCategory::HeaderInfo | FieldCategory::SummaryField => None,
        }
    }

    /// Largest line count of the three sections
    #[must_use]
    pub fn max_rows(&self) -> usize {
        self.emoluments
            .len()
            .max(self.govt_recoveries.len())
            .max(self.non_govt_recoveries.len())
    }
}

/// Aggregate the section fields of `record`
///
/// Every emolument and recovery descriptor is resolved and coerced; amounts
/// that are exactly zero (absent columns included) are dropped from the
/// display lists. Surviving lines keep descriptor order and are summed per
/// section.
#[must_use]
pub fn aggregate(record: &SalaryRecord, descriptors: &[FieldDescriptor]) -> SectionTotals {
    let mut totals = SectionTotals::default();

    for descriptor in descriptors {
        let Some(section) = totals.section_mut(descriptor.category) else {
            continue;
        };
        let field = ResolvedField::resolve(descriptor, record);
        let amount = field.amount();
        if amount.is_zero() {
            continue;
        }
        section.push(SectionEntry { field, amount });
    }

    totals
}

/// Net pay read from the designated summary field; zero when absent
#[must_use]
pub fn net_pay(record: &SalaryRecord, net_pay_descriptor: &FieldDescriptor) -> Decimal {
    to_amount(record.value(&net_pay_descriptor.expected_header))
}
