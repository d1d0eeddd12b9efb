//! Configuration for the payslip engine.

use serde::Deserialize;

use crate::error::Result;
use crate::schema::{DISPLAYED_HEADER_FIELDS, NET_SALARY_LABEL, SHALARTH_ID_LABEL};

/// Default admin contact shown in "not found" guidance
pub const DEFAULT_ADMIN_CONTACT: &str = "123-456-7890";

/// Zero-based column of the identifier in the district paybill format (column H)
pub const DEFAULT_IDENTIFIER_COLUMN: usize = 7;

/// Configuration for payslip generation, ingestion and rendering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayslipConfig {
    /// Heading used by the statement renderer
    pub app_title: String,
    /// Admin contact number included in lookup guidance
    pub admin_contact_mobile: String,
    /// Label of the summary field holding the authoritative net pay
    pub net_pay_label: String,
    /// Header of the employee identifier column
    pub identifier_header: String,
    /// Fixed column the identifier must occupy; `None` locates it by header
    pub identifier_column: Option<usize>,
    /// Header lines to print, in order; empty prints every header-info field
    pub header_fields: Vec<String>,
    /// Placeholder for header lines without a value
    pub not_available: String,
    /// Closing line of the statement
    pub footer: String,
}

impl Default for PayslipConfig {
    fn default() -> Self {
        Self {
            app_title: "Teachers Payslip Portal".to_string(),
            admin_contact_mobile: DEFAULT_ADMIN_CONTACT.to_string(),
            net_pay_label: NET_SALARY_LABEL.to_string(),
            identifier_header: SHALARTH_ID_LABEL.to_string(),
            identifier_column: Some(DEFAULT_IDENTIFIER_COLUMN),
            header_fields: DISPLAYED_HEADER_FIELDS
                .iter()
                .map(ToString::to_string)
                .collect(),
            not_available: "N/A".to_string(),
            footer: "*This is a system-generated payslip. Hence signature is not needed.*"
                .to_string(),
        }
    }
}

impl PayslipConfig {
    /// Load a configuration from JSON; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same configuration with a different admin contact
    #[must_use]
    pub fn with_admin_contact(mut self, mobile: impl Into<String>) -> Self {
        self.admin_contact_mobile = mobile.into();
        self
    }
}
