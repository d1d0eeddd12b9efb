//! Teacher profile model
//!
//! Profile values are used as fallbacks for payslip header lines when the
//! uploaded spreadsheet does not carry them. Credentials are not part of the
//! profile.

use serde::{Deserialize, Serialize};

use crate::schema::ProfileField;

/// Teacher details known independently of any paybill
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherProfile {
    pub shalarth_id: String,
    pub name: String,
    pub mobile: String,
    pub email_id: Option<String>,
    pub gpf_no: Option<String>,
    pub pan_no: Option<String>,
    pub pran_no: Option<String>,
    pub adhar_no: Option<String>,
    pub bank_ifsc_code: Option<String>,
    pub branch_name: Option<String>,
    pub pay_matrix: Option<String>,
    pub school_ddo_code: Option<String>,
    pub designation: Option<String>,
}

impl TeacherProfile {
    /// Create a profile with the mandatory identity fields
    pub fn new(
        shalarth_id: impl Into<String>,
        name: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            shalarth_id: shalarth_id.into(),
            name: name.into(),
            mobile: mobile.into(),
            ..Self::default()
        }
    }

    /// Value of a profile field, `None` when unset or blank
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::Name => Some(self.name.as_str()),
            ProfileField::ShalarthId => Some(self.shalarth_id.as_str()),
            ProfileField::Mobile => Some(self.mobile.as_str()),
            ProfileField::EmailId => self.email_id.as_deref(),
            ProfileField::GpfNo => self.gpf_no.as_deref(),
            ProfileField::PanNo => self.pan_no.as_deref(),
            ProfileField::PranNo => self.pran_no.as_deref(),
            ProfileField::AdharNo => self.adhar_no.as_deref(),
            ProfileField::BankIfscCode => self.bank_ifsc_code.as_deref(),
            ProfileField::BranchName => self.branch_name.as_deref(),
            ProfileField::PayMatrix => self.pay_matrix.as_deref(),
            ProfileField::SchoolDdoCode => self.school_ddo_code.as_deref(),
            ProfileField::Designation => self.designation.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}
