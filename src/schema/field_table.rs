//! Validated, ordered descriptor table

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{PayslipError, Result};
use crate::extract::normalize::normalize_header;
use crate::schema::payslip_fields::default_payslip_fields;
use crate::schema::{FieldCategory, FieldDescriptor};

/// Ordered sequence of field descriptors, validated when it is built
///
/// The table is immutable once constructed. Declaration order is the display
/// order within each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldTable {
    descriptors: Vec<FieldDescriptor>,
}

impl FieldTable {
    /// Build a table, rejecting empty labels, headers that normalize to nothing,
    /// and duplicate labels or normalized headers
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(PayslipError::InvalidFieldTable(
                "table has no descriptors".to_string(),
            ));
        }

        let mut labels = FxHashSet::default();
        let mut headers = FxHashSet::default();
        for descriptor in &descriptors {
            if descriptor.label.trim().is_empty() {
                return Err(PayslipError::InvalidFieldTable(
                    "descriptor with empty label".to_string(),
                ));
            }
            let normalized = normalize_header(&descriptor.expected_header);
            if normalized.is_empty() {
                return Err(PayslipError::InvalidFieldTable(format!(
                    "expected header of '{}' is empty after normalization",
                    descriptor.label
                )));
            }
            if !labels.insert(descriptor.label.as_str()) {
                return Err(PayslipError::InvalidFieldTable(format!(
                    "duplicate label '{}'",
                    descriptor.label
                )));
            }
            if !headers.insert(normalized) {
                return Err(PayslipError::InvalidFieldTable(format!(
                    "header '{}' of '{}' collides with another descriptor after normalization",
                    descriptor.expected_header, descriptor.label
                )));
            }
        }

        debug!("Loaded payslip field table with {} descriptors", descriptors.len());
        Ok(Self { descriptors })
    }

    /// Parse and validate a table from its JSON form
    pub fn from_json_str(json: &str) -> Result<Self> {
        let descriptors: Vec<FieldDescriptor> = serde_json::from_str(json)?;
        Self::new(descriptors)
    }

    /// All descriptors in declaration order
    #[must_use]
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Descriptors of one category, in declaration order
    pub fn by_category(&self, category: FieldCategory) -> impl Iterator<Item = &FieldDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.category == category)
    }

    /// Look up a descriptor by its payslip label
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.label == label)
    }

    /// Number of descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the table is empty (never true for a validated table)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self {
            descriptors: default_payslip_fields(),
        }
    }
}

impl<'de> Deserialize<'de> for FieldTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let descriptors = Vec::<FieldDescriptor>::deserialize(deserializer)?;
        Self::new(descriptors).map_err(serde::de::Error::custom)
    }
}
