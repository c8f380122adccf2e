//! Entry validation and the per-user entry log
//!
//! The analysis engine trusts its input; this is where entries get checked.
//! One entry per calendar day, every score within 1-10.

use std::collections::BTreeMap;
use std::path::Path;
use chrono::{Duration, NaiveDate};
use tracing::{debug, info};
use crate::types::{Symptom, SymptomRecord};
use crate::{Error, Result, SCORE_MAX, SCORE_MIN};

/// Reject records with any score outside 1-10
pub fn validate_record(record: &SymptomRecord) -> Result<()> {
    for symptom in Symptom::ALL {
        let value = record.value(symptom);
        if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
            return Err(Error::ValueOutOfRange {
                symptom,
                value,
                min: SCORE_MIN,
                max: SCORE_MAX,
            });
        }
    }
    Ok(())
}

/// One user's entries, unique per date
#[derive(Debug, Clone, Default)]
pub struct EntryLog {
    entries: BTreeMap<NaiveDate, SymptomRecord>,
}

impl EntryLog {
    /// Create empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records, validating each and rejecting duplicate dates
    pub fn from_records(records: impl IntoIterator<Item = SymptomRecord>) -> Result<Self> {
        let mut log = Self::new();
        for record in records {
            log.insert(record)?;
        }
        Ok(log)
    }

    /// Add a new entry; fails if the date is already logged
    pub fn insert(&mut self, record: SymptomRecord) -> Result<()> {
        validate_record(&record)?;
        if self.entries.contains_key(&record.date) {
            return Err(Error::DuplicateDate(record.date));
        }
        self.entries.insert(record.date, record);
        Ok(())
    }

    /// Add or replace the entry for its date, returning the old one
    pub fn upsert(&mut self, record: SymptomRecord) -> Result<Option<SymptomRecord>> {
        validate_record(&record)?;
        Ok(self.entries.insert(record.date, record))
    }

    /// Remove the entry for a date
    pub fn remove(&mut self, date: NaiveDate) -> Result<SymptomRecord> {
        self.entries.remove(&date).ok_or(Error::EntryNotFound(date))
    }

    /// Entry for a date
    pub fn get(&self, date: NaiveDate) -> Option<&SymptomRecord> {
        self.entries.get(&date)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is log empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &SymptomRecord> {
        self.entries.values()
    }

    /// Entries in `[end - days, end]`, oldest first (analysis input)
    ///
    /// A window reaching past the earliest representable date covers all history.
    pub fn window(&self, end: NaiveDate, days: u32) -> Vec<SymptomRecord> {
        let start = end
            .checked_sub_signed(Duration::days(days as i64))
            .unwrap_or(NaiveDate::MIN);
        self.entries.range(start..=end).map(|(_, r)| r.clone()).collect()
    }

    /// Entries in an optional date range, newest first, optionally capped
    pub fn range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Vec<SymptomRecord> {
        self.entries
            .values()
            .rev()
            .filter(|r| start.map_or(true, |s| r.date >= s))
            .filter(|r| end.map_or(true, |e| r.date <= e))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

/// Load a JSON array of records from a file
pub fn load_entries(path: impl AsRef<Path>) -> Result<EntryLog> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let records: Vec<SymptomRecord> = serde_json::from_str(&json)?;
    debug!(path = %path.display(), records = records.len(), "read entries");

    let log = EntryLog::from_records(records)?;
    info!(path = %path.display(), entries = log.len(), "loaded entry log");
    Ok(log)
}
