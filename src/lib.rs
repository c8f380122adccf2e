//! Symtrack: pattern analysis over daily symptom logs
//!
//! Entries (pain, mood, energy, sleep + trigger labels) → PatternEngine →
//! correlation, trend and trigger findings with a confidence score.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};

// =============================================================================
// ENGINE THRESHOLDS
// =============================================================================

/// Fewer entries than this in the window produce no findings at all
pub const MIN_ENTRIES: usize = 7;

/// |r| must exceed this for a correlation finding
pub const CORRELATION_THRESHOLD: f64 = 0.5;

/// |slope| (points per entry) must exceed this for a trend finding
pub const TREND_SLOPE_THRESHOLD: f64 = 0.1;

/// Trend confidence = min(|slope| * scale, 1)
pub const TREND_CONFIDENCE_SCALE: f64 = 2.0;

/// A trigger is only evaluated once it has been logged this many times
pub const TRIGGER_MIN_OCCURRENCES: usize = 3;

/// Co-occurrence ratio must exceed this for a trigger finding
pub const TRIGGER_RATIO_THRESHOLD: f64 = 0.6;

/// pain >= this counts as a high-pain day
pub const HIGH_PAIN_LEVEL: u8 = 7;

/// mood <= this counts as a low-mood day
pub const LOW_MOOD_LEVEL: u8 = 4;

// =============================================================================
// ENTRY RANGE
// =============================================================================

/// Lowest valid symptom score
pub const SCORE_MIN: u8 = 1;

/// Highest valid symptom score
pub const SCORE_MAX: u8 = 10;

// =============================================================================
// SUMMARY
// =============================================================================

/// Default analysis window (days back from today)
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Streaks are checked at most this far back
pub const STREAK_MAX_DAYS: u32 = 365;

/// Average half-to-half change needed before a direction is reported
pub const DIRECTION_THRESHOLD: f64 = 0.5;

/// Default length of "top N" summary lists
pub const SUMMARY_LIST_LIMIT: usize = 5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
