//! Pattern findings produced by the analysis engine

use serde::{Deserialize, Serialize};
use crate::types::Symptom;

/// Which metric a trigger was associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMetric {
    /// High-pain co-occurrence
    Pain,
    /// Low-mood co-occurrence
    Mood,
}

/// Kind tag, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Correlation,
    Trend,
    Trigger,
}

impl PatternKind {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            PatternKind::Correlation => "\x1b[36m", // Cyan
            PatternKind::Trend => "\x1b[33m",       // Yellow
            PatternKind::Trigger => "\x1b[35m",     // Magenta
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for kind
    pub fn emoji(&self) -> &'static str {
        match self {
            PatternKind::Correlation => "🔗",
            PatternKind::Trend => "📈",
            PatternKind::Trigger => "⚡",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PatternKind::Correlation => "correlation",
            PatternKind::Trend => "trend",
            PatternKind::Trigger => "trigger",
        };
        write!(f, "{}", name)
    }
}

/// Payload of a correlation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationData {
    /// Signed Pearson coefficient
    pub correlation: f64,
    pub symptoms: [Symptom; 2],
}

/// Payload of a trend finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendData {
    /// Signed OLS slope, points per entry
    pub trend: f64,
    pub symptom: Symptom,
    /// Raw scores in entry order
    pub values: Vec<u8>,
}

/// Payload of a trigger finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerData {
    pub trigger: String,
    pub metric: TriggerMetric,
    /// Co-occurrences / occurrences
    pub ratio: f64,
    /// Times the trigger was logged in the window
    pub occurrences: usize,
}

/// A single finding
///
/// Serialized as `{"type": ..., "description": ..., "confidence": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pattern {
    Correlation {
        description: String,
        confidence: f64,
        data: CorrelationData,
    },
    Trend {
        description: String,
        confidence: f64,
        data: TrendData,
    },
    Trigger {
        description: String,
        confidence: f64,
        data: TriggerData,
    },
}

impl Pattern {
    /// Kind tag
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Correlation { .. } => PatternKind::Correlation,
            Pattern::Trend { .. } => PatternKind::Trend,
            Pattern::Trigger { .. } => PatternKind::Trigger,
        }
    }

    /// Precomposed sentence
    pub fn description(&self) -> &str {
        match self {
            Pattern::Correlation { description, .. }
            | Pattern::Trend { description, .. }
            | Pattern::Trigger { description, .. } => description,
        }
    }

    /// Confidence in [0, 1]
    pub fn confidence(&self) -> f64 {
        match self {
            Pattern::Correlation { confidence, .. }
            | Pattern::Trend { confidence, .. }
            | Pattern::Trigger { confidence, .. } => *confidence,
        }
    }

    /// Confidence as a rounded percentage
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence() * 100.0).round() as u32
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let kind = self.kind();
        format!(
            "{}{} {} ({}% confidence){}",
            kind.color_code(),
            kind.emoji(),
            self.description(),
            self.confidence_percent(),
            PatternKind::color_reset()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "type={} | confidence={}% | {}",
            self.kind(),
            self.confidence_percent(),
            self.description()
        )
    }
}
