//! Salary period (calendar month of a paybill)

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{PayslipError, Result};

/// One payroll month, e.g. March 2024
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalaryPeriod {
    /// Calendar year
    pub year: i32,
    /// Calendar month
    pub month: Month,
}

impl SalaryPeriod {
    /// Create a new salary period
    #[must_use]
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Parse a period from the year and month strings used by the upload form
    ///
    /// The month accepts full names or three-letter abbreviations in any case
    /// ("March", "mar"); the year must be a four-digit number.
    pub fn parse(year: &str, month: &str) -> Result<Self> {
        let year_str = year.trim();
        if year_str.len() != 4 || !year_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PayslipError::InvalidPeriod(format!("year '{year}'")));
        }
        let year = year_str
            .parse::<i32>()
            .map_err(|_| PayslipError::InvalidPeriod(format!("year '{year}'")))?;
        let month = Month::from_str(month.trim())
            .map_err(|_| PayslipError::InvalidPeriod(format!("month '{month}'")))?;
        Ok(Self { year, month })
    }

    /// Full English month name ("March")
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Paybill identifier for this period ("2024-March")
    #[must_use]
    pub fn paybill_id(&self) -> String {
        format!("{}-{}", self.year, self.month_name())
    }
}

impl Ord for SalaryPeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then(self.month.number_from_month().cmp(&other.month.number_from_month()))
    }
}

impl PartialOrd for SalaryPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SalaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
