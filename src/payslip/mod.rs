//! Payslip assembly
//!
//! Combines header lines, the three aggregated sections and the net pay figure
//! into the structure consumed by renderers.

pub mod render;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::aggregate::{SectionTotals, aggregate, net_pay};
use crate::config::PayslipConfig;
use crate::error::{PayslipError, Result};
use crate::extract::resolve::CellValue;
use crate::models::{SalaryPeriod, SalaryRecord, TeacherProfile};
use crate::schema::{FieldCategory, FieldDescriptor, FieldTable};
use crate::words::amount_to_words;

pub use render::{format_amount, render_text};

/// Where a header line's value came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "camelCase")]
pub enum HeaderValue {
    /// Read from the spreadsheet row
    Sheet(CellValue),
    /// Taken from the teacher profile
    Profile(String),
    /// Neither source had a value
    NotAvailable,
}

/// One line of the payslip header block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderField {
    /// Payslip label
    pub label: String,
    /// Resolved value
    pub value: HeaderValue,
}

impl HeaderField {
    /// Resolve a header descriptor, falling back on the profile when the
    /// spreadsheet has no value
    #[must_use]
    pub fn resolve(
        descriptor: &FieldDescriptor,
        record: &SalaryRecord,
        profile: Option<&TeacherProfile>,
    ) -> Self {
        let from_sheet = record
            .value(&descriptor.expected_header)
            .cloned()
            .map(HeaderValue::Sheet);
        let value = from_sheet
            .or_else(|| {
                let field = descriptor.profile_field?;
                profile?
                    .get(field)
                    .map(|v| HeaderValue::Profile(v.to_string()))
            })
            .unwrap_or(HeaderValue::NotAvailable);

        Self {
            label: descriptor.label.clone(),
            value,
        }
    }

    /// Text to print, `placeholder` when not available
    #[must_use]
    pub fn display<'a>(&'a self, placeholder: &'a str) -> Cow<'a, str> {
        match &self.value {
            HeaderValue::Sheet(cell) => Cow::Owned(cell.to_string()),
            HeaderValue::Profile(text) => Cow::Borrowed(text.as_str()),
            HeaderValue::NotAvailable => Cow::Borrowed(placeholder),
        }
    }
}

/// A fully resolved payslip, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Salary month
    pub period: SalaryPeriod,
    /// Teacher identifier the record belongs to
    pub teacher_id: String,
    /// Header block lines in display order
    pub header_fields: Vec<HeaderField>,
    /// Emoluments, govt. and non-govt. recoveries
    pub sections: SectionTotals,
    /// Net pay as stated by the spreadsheet
    pub net_pay: Decimal,
    /// Net pay rupees in words
    pub net_pay_words: String,
}

impl Payslip {
    /// Header line by label
    #[must_use]
    pub fn header(&self, label: &str) -> Option<&HeaderField> {
        self.header_fields.iter().find(|h| h.label == label)
    }
}

/// Builds payslips from salary records with a fixed table and configuration
#[derive(Debug, Clone)]
pub struct PayslipEngine {
    table: FieldTable,
    config: PayslipConfig,
    net_pay_index: usize,
}

impl PayslipEngine {
    /// Create an engine; the table must contain a summary field carrying the
    /// configured net pay label
    pub fn new(table: FieldTable, config: PayslipConfig) -> Result<Self> {
        let net_pay_index = net_pay_position(&table, &config)?;

        for label in &config.header_fields {
            if table.find(label).is_none() {
                return Err(PayslipError::InvalidFieldTable(format!(
                    "configured header line '{label}' has no descriptor"
                )));
            }
        }

        Ok(Self {
            table,
            config,
            net_pay_index,
        })
    }

    /// Engine over the built-in table with a custom configuration
    pub fn with_config(config: PayslipConfig) -> Result<Self> {
        Self::new(FieldTable::default(), config)
    }

    /// The descriptor table
    #[must_use]
    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    /// The configuration
    #[must_use]
    pub fn config(&self) -> &PayslipConfig {
        &self.config
    }

    fn net_pay_descriptor(&self) -> &FieldDescriptor {
        &self.table.descriptors()[self.net_pay_index]
    }

    fn header_descriptors(&self) -> Vec<&FieldDescriptor> {
        if self.config.header_fields.is_empty() {
            self.table.by_category(FieldCategory::HeaderInfo).collect()
        } else {
            self.config
                .header_fields
                .iter()
                .filter_map(|label| self.table.find(label))
                .collect()
        }
    }

    /// Aggregate the three sections of a record
    #[must_use]
    pub fn sections(&self, record: &SalaryRecord) -> SectionTotals {
        aggregate(record, self.table.descriptors())
    }

    /// Net pay of a record, read from the designated summary field
    #[must_use]
    pub fn net_pay(&self, record: &SalaryRecord) -> Decimal {
        net_pay(record, self.net_pay_descriptor())
    }

    /// Build the payslip for `record`, using `profile` for header fallbacks
    #[must_use]
    pub fn build(&self, record: &SalaryRecord, profile: Option<&TeacherProfile>) -> Payslip {
        let header_fields = self
            .header_descriptors()
            .into_iter()
            .map(|d| HeaderField::resolve(d, record, profile))
            .collect();
        let sections = self.sections(record);
        let net_pay = self.net_pay(record);

        debug!(
            "Built payslip {} with {}/{}/{} section lines",
            record.id(),
            sections.emoluments.len(),
            sections.govt_recoveries.len(),
            sections.non_govt_recoveries.len()
        );

        Payslip {
            period: record.period(),
            teacher_id: record.teacher_id().to_string(),
            header_fields,
            sections,
            net_pay,
            net_pay_words: amount_to_words(net_pay),
        }
    }

    /// Render a payslip with this engine's configuration
    #[must_use]
    pub fn render(&self, payslip: &Payslip) -> String {
        render_text(payslip, &self.config)
    }
}

impl Default for PayslipEngine {
    fn default() -> Self {
        Self::new(FieldTable::default(), PayslipConfig::default())
            .expect("Built-in field table must satisfy the default configuration")
    }
}

/// Index of the summary descriptor carrying the configured net pay label
fn net_pay_position(table: &FieldTable, config: &PayslipConfig) -> Result<usize> {
    table
        .descriptors()
        .iter()
        .position(|d| d.label == config.net_pay_label && d.category == FieldCategory::SummaryField)
        .ok_or_else(|| PayslipError::MissingNetPayField(config.net_pay_label.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NET_SALARY_LABEL;

    #[test]
    fn test_default_engine_uses_net_salary_column() {
        let engine = PayslipEngine::default();
        assert_eq!(engine.net_pay_descriptor().label, NET_SALARY_LABEL);
        assert_eq!(engine.config(), &PayslipConfig::default());
    }

    #[test]
    fn test_net_pay_label_must_be_a_summary_field() {
        let config = PayslipConfig {
            net_pay_label: "BASIC PAY".to_string(),
            ..PayslipConfig::default()
        };
        assert!(matches!(
            net_pay_position(&FieldTable::default(), &config),
            Err(PayslipError::MissingNetPayField(label)) if label == "BASIC PAY"
        ));
    }
}
