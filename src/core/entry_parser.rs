//! Entry line parser for interactive logging
//!
//! Line format:
//!   2024-03-01 pain=7 mood=4 energy=5 sleep=6 triggers=Stress,Weather notes="rough night"
//!
//! Fields after the date may come in any order; `triggers` and `notes` are optional.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use crate::core::entries::validate_record;
use crate::types::{Symptom, SymptomRecord};
use crate::{Error, Result};

lazy_static! {
    static ref RE_DATE: Regex = Regex::new(r"^\s*(\d{4}-\d{2}-\d{2})\b").unwrap();

    static ref RE_SCORE: Regex =
        Regex::new(r"(?i)\b(pain|mood|energy|sleep)\s*=\s*(\d+)\b").unwrap();

    static ref RE_TRIGGERS: Regex =
        Regex::new(r#"(?i)\btriggers\s*=\s*(?:"([^"]*)"|([^\s"]+))"#).unwrap();

    static ref RE_NOTES: Regex = Regex::new(r#"(?i)\bnotes\s*=\s*"([^"]*)""#).unwrap();
}

/// Parse and validate one entry line
pub fn parse_entry_line(line: &str) -> Result<SymptomRecord> {
    let date_str = RE_DATE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            Error::InvalidLine(format!("missing leading date in '{}'", line.trim()))
        })?;
    let date = parse_date(date_str)?;

    let mut scores: [Option<u8>; 4] = [None; 4];
    for caps in RE_SCORE.captures_iter(line) {
        let name = caps[1].to_lowercase();
        let symptom = Symptom::from_name(&name)
            .ok_or_else(|| Error::InvalidLine(format!("unknown symptom '{}'", name)))?;
        let value: u8 = caps[2].parse().map_err(|_| {
            Error::InvalidLine(format!("{} value '{}' is not a score", name, &caps[2]))
        })?;
        scores[slot(symptom)] = Some(value);
    }

    let score = |symptom: Symptom| {
        scores[slot(symptom)].ok_or_else(|| Error::InvalidLine(format!("missing {}=N", symptom)))
    };

    let mut record = SymptomRecord::new(
        date,
        score(Symptom::Pain)?,
        score(Symptom::Mood)?,
        score(Symptom::Energy)?,
        score(Symptom::Sleep)?,
    );

    if let Some(caps) = RE_TRIGGERS.captures(line) {
        let list = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        record.triggers = list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(caps) = RE_NOTES.captures(line) {
        record.notes = Some(caps[1].to_string());
    }

    validate_record(&record)?;
    Ok(record)
}

/// Parse an ISO calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

fn slot(symptom: Symptom) -> usize {
    match symptom {
        Symptom::Pain => 0,
        Symptom::Mood => 1,
        Symptom::Energy => 2,
        Symptom::Sleep => 3,
    }
}

// =============================================================================
// TESTS
// =============================================================================
