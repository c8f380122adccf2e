//! Dashboard summary structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::types::{Symptom, SymptomRecord};

/// Per-symptom mean, rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SymptomAverages {
    pub pain: f64,
    pub mood: f64,
    pub energy: f64,
    pub sleep: f64,
}

impl SymptomAverages {
    /// Average for one symptom
    pub fn get(&self, symptom: Symptom) -> f64 {
        match symptom {
            Symptom::Pain => self.pain,
            Symptom::Mood => self.mood,
            Symptom::Energy => self.energy,
            Symptom::Sleep => self.sleep,
        }
    }
}

/// Whether a symptom is getting better for the user
///
/// Pain improves downward; mood, energy and sleep improve upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Improving,
    Worsening,
    Stable,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Improving => "improving",
            Direction::Worsening => "worsening",
            Direction::Stable => "stable",
        };
        write!(f, "{}", name)
    }
}

/// How often a trigger was logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerCount {
    pub trigger: String,
    pub count: usize,
}

/// Direction per symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directions {
    pub pain: Direction,
    pub mood: Direction,
    pub energy: Direction,
    pub sleep: Direction,
}

/// Everything a dashboard shows beside the patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Day the streak is counted back from
    pub today: NaiveDate,
    pub entry_count: usize,
    pub averages: SymptomAverages,
    /// Consecutive logged days ending today
    pub streak: u32,
    pub directions: Directions,
    pub common_triggers: Vec<TriggerCount>,
    pub worst_days: Vec<SymptomRecord>,
    pub best_days: Vec<SymptomRecord>,
}
