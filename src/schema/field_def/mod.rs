//! Module for payslip field definitions
//!
//! This module provides the descriptor types that tie a payslip label to its
//! spreadsheet header and section, plus the macro used to declare tables.

pub mod field;
mod macros;

pub use field::{FieldCategory, FieldDescriptor, ProfileField};

// Re-export the macro to make it available to users of this module
pub use crate::payslip_fields;
