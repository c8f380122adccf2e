//! Tunable engine thresholds

use serde::{Deserialize, Serialize};
use crate::{
    MIN_ENTRIES, CORRELATION_THRESHOLD, TREND_SLOPE_THRESHOLD,
    TREND_CONFIDENCE_SCALE, TRIGGER_MIN_OCCURRENCES, TRIGGER_RATIO_THRESHOLD,
    HIGH_PAIN_LEVEL, LOW_MOOD_LEVEL,
};

/// Every cutoff the engine applies, injected at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum window size before any pass runs
    pub min_entries: usize,
    /// Strict lower bound on |r|
    pub correlation: f64,
    /// Strict lower bound on |slope|
    pub trend_slope: f64,
    /// Slope-to-confidence multiplier
    pub trend_confidence_scale: f64,
    /// Inclusive lower bound on trigger occurrences
    pub trigger_min_occurrences: usize,
    /// Strict lower bound on co-occurrence ratio
    pub trigger_ratio: f64,
    /// pain >= this is a high-pain day
    pub high_pain_level: u8,
    /// mood <= this is a low-mood day
    pub low_mood_level: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_entries: MIN_ENTRIES,
            correlation: CORRELATION_THRESHOLD,
            trend_slope: TREND_SLOPE_THRESHOLD,
            trend_confidence_scale: TREND_CONFIDENCE_SCALE,
            trigger_min_occurrences: TRIGGER_MIN_OCCURRENCES,
            trigger_ratio: TRIGGER_RATIO_THRESHOLD,
            high_pain_level: HIGH_PAIN_LEVEL,
            low_mood_level: LOW_MOOD_LEVEL,
        }
    }
}
