//! Core types for Symtrack

mod record;
mod pattern;
mod thresholds;
mod summary;

pub use record::{Symptom, SymptomRecord};
pub use pattern::{Pattern, PatternKind, TriggerMetric, CorrelationData, TrendData, TriggerData};
pub use thresholds::Thresholds;
pub use summary::{Summary, SymptomAverages, Direction, Directions, TriggerCount};
