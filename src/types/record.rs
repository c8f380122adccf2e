//! Symptom entry structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four self-reported symptom scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symptom {
    Pain,
    Mood,
    Energy,
    Sleep,
}

impl Symptom {
    /// All symptoms, in reporting order
    pub const ALL: [Symptom; 4] = [Symptom::Pain, Symptom::Mood, Symptom::Energy, Symptom::Sleep];

    /// Lowercase name, as used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Symptom::Pain => "pain",
            Symptom::Mood => "mood",
            Symptom::Energy => "energy",
            Symptom::Sleep => "sleep",
        }
    }

    /// Capitalized name for sentences
    pub fn capitalized(&self) -> &'static str {
        match self {
            Symptom::Pain => "Pain",
            Symptom::Mood => "Mood",
            Symptom::Energy => "Energy",
            Symptom::Sleep => "Sleep",
        }
    }

    /// Display label for charts and reports
    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Pain => "Pain Level",
            Symptom::Mood => "Mood",
            Symptom::Energy => "Energy Level",
            Symptom::Sleep => "Sleep Quality",
        }
    }

    /// Parse the lowercase wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One day's self-report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRecord {
    /// Calendar day (ordering only)
    pub date: NaiveDate,
    /// 1 = no pain, 10 = severe
    pub pain: u8,
    /// 1 = very low, 10 = excellent
    pub mood: u8,
    /// 1 = exhausted, 10 = very energetic
    pub energy: u8,
    /// 1 = very poor, 10 = excellent
    pub sleep: u8,
    /// Free-text trigger labels, duplicates kept
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SymptomRecord {
    /// Create a record with no triggers or notes
    pub fn new(date: NaiveDate, pain: u8, mood: u8, energy: u8, sleep: u8) -> Self {
        Self {
            date,
            pain,
            mood,
            energy,
            sleep,
            triggers: Vec::new(),
            notes: None,
        }
    }

    /// Builder: attach trigger labels
    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: attach a note
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Score for one symptom
    pub fn value(&self, symptom: Symptom) -> u8 {
        match symptom {
            Symptom::Pain => self.pain,
            Symptom::Mood => self.mood,
            Symptom::Energy => self.energy,
            Symptom::Sleep => self.sleep,
        }
    }

    /// Higher is a harder day
    pub fn burden_score(&self) -> i32 {
        self.pain as i32
            + (10 - self.mood as i32)
            + (10 - self.energy as i32)
            + (10 - self.sleep as i32)
    }

    /// Higher is a better day
    pub fn wellness_score(&self) -> i32 {
        (10 - self.pain as i32) + self.mood as i32 + self.energy as i32 + self.sleep as i32
    }
}
