//! Module for the payslip field schema.

pub mod field_def;
pub mod field_table;
pub mod payslip_fields;

// Re-export the main schema types for easier access
pub use field_def::{FieldCategory, FieldDescriptor, ProfileField};
pub use field_table::FieldTable;
pub use payslip_fields::{
    DISPLAYED_HEADER_FIELDS, NET_SALARY_LABEL, SHALARTH_ID_LABEL, default_payslip_fields,
};
