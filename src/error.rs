//! Error type for entry loading, validation and configuration

use chrono::NaiveDate;
use thiserror::Error;
use crate::types::Symptom;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{symptom} value {value} is out of range, must be between {min} and {max}")]
    ValueOutOfRange {
        symptom: Symptom,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("entry for {0} already exists")]
    DuplicateDate(NaiveDate),

    #[error("no entry for {0}")]
    EntryNotFound(NaiveDate),

    #[error("invalid entry line: {0}")]
    InvalidLine(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Caller sent bad input (as opposed to an environment failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::ValueOutOfRange { .. }
                | Error::DuplicateDate(_)
                | Error::InvalidLine(_)
                | Error::InvalidDate(_)
                | Error::Json(_)
        )
    }
}
