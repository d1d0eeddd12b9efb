//! Domain models for salary data

pub mod period;
pub mod salary_record;
pub mod teacher;

pub use period::SalaryPeriod;
pub use salary_record::{RecordKey, SalaryRecord};
pub use teacher::TeacherProfile;
