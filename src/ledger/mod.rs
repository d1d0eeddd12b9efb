//! Salary ledger: the collection of ingested paybills and salary records
//!
//! Records are inserted only through paybill ingestion and never modified.
//! A period can be re-uploaded only after its paybill is deleted.

pub mod ingest;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::PayslipConfig;
use crate::error::{PayslipError, Result};
use crate::models::{RecordKey, SalaryPeriod, SalaryRecord, TeacherProfile};
use crate::payslip::{Payslip, PayslipEngine};
use crate::utils::logging::{log_operation_complete, log_operation_start};

pub use ingest::{IngestSummary, Paybill, PaybillMeta, SheetGrid};

/// Outcome of a teacher's payslip search
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PayslipLookup<'a> {
    /// No search has been made yet
    #[default]
    NotSearched,
    /// A record exists for the requested teacher and month
    Found(&'a SalaryRecord),
    /// No record exists; `message` tells the teacher whom to contact
    NotFound {
        period: SalaryPeriod,
        message: String,
    },
}

impl<'a> PayslipLookup<'a> {
    /// The found record, if any
    #[must_use]
    pub fn record(&self) -> Option<&'a SalaryRecord> {
        match self {
            PayslipLookup::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Whether the search found a record
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, PayslipLookup::Found(_))
    }
}

/// Guidance shown when a payslip is not available
#[must_use]
pub fn not_found_message(period: SalaryPeriod, admin_contact: &str) -> String {
    format!(
        "Payslip data for {} {} is not available for your Shalarth ID. Please contact Admin at {admin_contact}.",
        period.month_name(),
        period.year
    )
}

/// In-memory store of paybills and salary records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryLedger {
    paybills: Vec<Paybill>,
    #[serde(with = "record_list")]
    records: FxHashMap<RecordKey, SalaryRecord>,
}

impl SalaryLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a paybill upload
    ///
    /// Rejects the upload when the period already has a paybill or any salary
    /// record. On success every teacher row becomes a salary record and a
    /// paybill master entry is stored.
    pub fn ingest_paybill(
        &mut self,
        meta: PaybillMeta,
        grid: &SheetGrid,
        config: &PayslipConfig,
    ) -> Result<IngestSummary> {
        let period = meta.period;
        if self.has_period(period) {
            return Err(PayslipError::DuplicatePeriod(period));
        }

        log_operation_start("Ingesting paybill", &meta.file_name);
        let start = Instant::now();

        let (records, skipped) = ingest::records_from_grid(grid, period, config)?;
        let count = records.len();
        for record in records {
            self.records.insert(record.key().clone(), record);
        }

        let paybill = Paybill {
            id: period.paybill_id(),
            period,
            remarks: meta.remarks,
            file_name: meta.file_name,
            uploaded_at: chrono::Utc::now(),
            teacher_count: count,
        };
        let summary = IngestSummary {
            paybill_id: paybill.id.clone(),
            records: count,
            skipped,
        };
        log_operation_complete(
            "ingested",
            &paybill.file_name,
            count,
            Some(start.elapsed()),
        );
        self.paybills.push(paybill);

        Ok(summary)
    }

    /// Delete a paybill and every salary record of its period
    pub fn delete_paybill(&mut self, paybill_id: &str) -> Result<Paybill> {
        let index = self
            .paybills
            .iter()
            .position(|p| p.id == paybill_id)
            .ok_or_else(|| PayslipError::UnknownPaybill(paybill_id.to_string()))?;
        let paybill = self.paybills.remove(index);

        let before = self.records.len();
        self.records.retain(|key, _| key.period != paybill.period);
        log::info!(
            "Deleted paybill {} and {} salary records",
            paybill.id,
            before - self.records.len()
        );
        Ok(paybill)
    }

    /// Whether a paybill or any record exists for `period`
    #[must_use]
    pub fn has_period(&self, period: SalaryPeriod) -> bool {
        self.paybills.iter().any(|p| p.period == period)
            || self.records.keys().any(|k| k.period == period)
    }

    /// Paybills, most recent upload first
    #[must_use]
    pub fn paybills(&self) -> Vec<&Paybill> {
        let mut paybills: Vec<&Paybill> = self.paybills.iter().collect();
        paybills.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        paybills
    }

    /// Number of salary records
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Record for a teacher and month, if ingested
    #[must_use]
    pub fn get(&self, teacher_id: &str, period: SalaryPeriod) -> Option<&SalaryRecord> {
        self.records.get(&RecordKey::new(period, teacher_id))
    }

    /// Search a teacher's payslip for a month
    ///
    /// A missing record is a normal outcome and yields `NotFound` with
    /// guidance naming the configured admin contact.
    #[must_use]
    pub fn lookup(
        &self,
        teacher_id: &str,
        period: SalaryPeriod,
        config: &PayslipConfig,
    ) -> PayslipLookup<'_> {
        match self.get(teacher_id, period) {
            Some(record) => PayslipLookup::Found(record),
            None => {
                log::info!("No salary record for {teacher_id} in {period}");
                PayslipLookup::NotFound {
                    period,
                    message: not_found_message(period, &config.admin_contact_mobile),
                }
            }
        }
    }

    /// All records of one teacher, oldest month first
    #[must_use]
    pub fn records_for_teacher(&self, teacher_id: &str) -> Vec<&SalaryRecord> {
        let mut records: Vec<&SalaryRecord> = self
            .records
            .values()
            .filter(|r| r.teacher_id() == teacher_id)
            .collect();
        records.sort_by_key(|r| r.period());
        records
    }

    /// Build every payslip of a period in parallel, sorted by teacher id
    ///
    /// Profiles are matched on Shalarth ID and used for header fallbacks.
    #[must_use]
    pub fn payslips_for_period(
        &self,
        engine: &PayslipEngine,
        period: SalaryPeriod,
        profiles: &[TeacherProfile],
    ) -> Vec<Payslip> {
        let profiles: FxHashMap<&str, &TeacherProfile> = profiles
            .iter()
            .map(|p| (p.shalarth_id.as_str(), p))
            .collect();

        let records: Vec<&SalaryRecord> = self
            .records
            .values()
            .filter(|r| r.period() == period)
            .collect();

        let mut payslips: Vec<Payslip> = records
            .par_iter()
            .map(|record| engine.build(record, profiles.get(record.teacher_id()).copied()))
            .collect();
        payslips.sort_by(|a, b| a.teacher_id.cmp(&b.teacher_id));
        payslips
    }

    /// Serialize the whole ledger as a JSON snapshot
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a ledger from a JSON snapshot
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Records are stored in snapshots as a list; keys are rebuilt from the records
mod record_list {
    use super::{RecordKey, SalaryRecord};
    use rustc_hash::FxHashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(
        records: &FxHashMap<RecordKey, SalaryRecord>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut list: Vec<&SalaryRecord> = records.values().collect();
        list.sort_by(|a, b| a.key().cmp(b.key()));
        list.serialize(serializer)
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<FxHashMap<RecordKey, SalaryRecord>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<SalaryRecord>::deserialize(deserializer)?;
        Ok(list.into_iter().map(|r| (r.key().clone(), r)).collect())
    }
}
