//! Summary statistics for dashboards and reports

use std::collections::HashMap;
use chrono::{Duration, NaiveDate};
use crate::core::stats::mean;
use crate::types::{
    Direction, Directions, Summary, Symptom, SymptomAverages, SymptomRecord, TriggerCount,
};
use crate::{DIRECTION_THRESHOLD, MIN_ENTRIES, STREAK_MAX_DAYS, SUMMARY_LIST_LIMIT};

impl Summary {
    /// Build the full summary for a set of entries
    pub fn build(entries: &[SymptomRecord], today: NaiveDate) -> Self {
        Self {
            today,
            entry_count: entries.len(),
            averages: averages(entries),
            streak: streak(entries, today),
            directions: Directions {
                pain: direction(entries, Symptom::Pain),
                mood: direction(entries, Symptom::Mood),
                energy: direction(entries, Symptom::Energy),
                sleep: direction(entries, Symptom::Sleep),
            },
            common_triggers: most_common_triggers(entries, SUMMARY_LIST_LIMIT),
            worst_days: worst_days(entries, SUMMARY_LIST_LIMIT),
            best_days: best_days(entries, SUMMARY_LIST_LIMIT),
        }
    }
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of integer scores, rounded to one decimal
pub fn rounded_average(values: &[u8]) -> f64 {
    let values: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    round1(mean(&values))
}

/// Per-symptom averages; all zero for no entries
pub fn averages(entries: &[SymptomRecord]) -> SymptomAverages {
    let avg = |symptom: Symptom| {
        let values: Vec<u8> = entries.iter().map(|e| e.value(symptom)).collect();
        rounded_average(&values)
    };
    SymptomAverages {
        pain: avg(Symptom::Pain),
        mood: avg(Symptom::Mood),
        energy: avg(Symptom::Energy),
        sleep: avg(Symptom::Sleep),
    }
}

/// Consecutive days with an entry, counting back from `today`
pub fn streak(entries: &[SymptomRecord], today: NaiveDate) -> u32 {
    let mut streak = 0;
    for i in 0..STREAK_MAX_DAYS {
        let Some(day) = today.checked_sub_signed(Duration::days(i as i64)) else {
            break;
        };
        if entries.iter().any(|e| e.date == day) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Compare the later half of the window against the earlier half
pub fn direction(entries: &[SymptomRecord], symptom: Symptom) -> Direction {
    if entries.len() < MIN_ENTRIES {
        return Direction::Stable;
    }

    let mut sorted: Vec<&SymptomRecord> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    let values: Vec<u8> = sorted.iter().map(|e| e.value(symptom)).collect();

    let (first, second) = values.split_at(values.len() / 2);
    let difference = rounded_average(second) - rounded_average(first);

    // Lower pain is better; higher is better for everything else
    let improvement = match symptom {
        Symptom::Pain => -difference,
        _ => difference,
    };

    if improvement > DIRECTION_THRESHOLD {
        Direction::Improving
    } else if improvement < -DIRECTION_THRESHOLD {
        Direction::Worsening
    } else {
        Direction::Stable
    }
}

/// Most frequent triggers, ties in order of first appearance
pub fn most_common_triggers(entries: &[SymptomRecord], limit: usize) -> Vec<TriggerCount> {
    let mut counts: Vec<TriggerCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for trigger in entries.iter().flat_map(|e| e.triggers.iter()) {
        match index.get(trigger.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(trigger.as_str(), counts.len());
                counts.push(TriggerCount {
                    trigger: trigger.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Highest-burden days first
pub fn worst_days(entries: &[SymptomRecord], limit: usize) -> Vec<SymptomRecord> {
    let mut days = entries.to_vec();
    days.sort_by(|a, b| b.burden_score().cmp(&a.burden_score()));
    days.truncate(limit);
    days
}

/// Highest-wellness days first
pub fn best_days(entries: &[SymptomRecord], limit: usize) -> Vec<SymptomRecord> {
    let mut days = entries.to_vec();
    days.sort_by(|a, b| b.wellness_score().cmp(&a.wellness_score()));
    days.truncate(limit);
    days
}

// =============================================================================
// TESTS
// =============================================================================
