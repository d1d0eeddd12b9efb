//! Macros for field descriptor tables
//!
//! This module provides a macro to reduce boilerplate when declaring the ordered
//! payslip field table.

/// Build an ordered `Vec<FieldDescriptor>` from a compact declaration list
///
/// Each entry is a category name followed by the label (which doubles as the
/// expected header). An optional `=> ProfileField` names the profile fallback,
/// and a trailing `[currency]` marks non-section fields as monetary. Section
/// categories are always monetary.
///
/// # Example
///
/// ```rust
/// use payslip_engine::payslip_fields;
///
/// let fields = payslip_fields![
///     HeaderInfo "EMPLOYEE NAME" => Name,
///     Emolument "BASIC PAY",
///     SummaryField "EMPLOYEE NET SALARY" [currency],
/// ];
/// assert_eq!(fields.len(), 3);
/// assert!(fields[2].is_currency);
/// ```
#[macro_export]
macro_rules! payslip_fields {
    (
        $(
            $category:ident $label:literal
            $( => $profile:ident )?
            $( [ $flag:ident ] )?
        ),* $(,)?
    ) => {
        {
            use $crate::schema::{FieldCategory, FieldDescriptor, ProfileField};

            vec![
                $(
                    {
                        #[allow(unused_mut)]
                        let mut descriptor = FieldDescriptor::new($label, FieldCategory::$category);
                        $( descriptor = descriptor.with_profile_field(ProfileField::$profile); )?
                        $( descriptor = descriptor.currency(stringify!($flag) == "currency"); )?
                        descriptor
                    }
                ),*
            ]
        }
    };
}
