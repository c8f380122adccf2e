//! Pattern Engine: correlation, trend and trigger passes over one user's entries
//!
//! Pass order is fixed and part of the contract:
//! - correlation: Pearson r for (pain, mood) and (energy, sleep)
//! - trend: OLS slope of each symptom against entry position
//! - trigger: high-pain / low-mood co-occurrence per trigger label
//!
//! Entries are expected pre-validated and sorted ascending by date.

use std::collections::HashMap;
use tracing::debug;
use crate::core::stats::{index_slope, pearson};
use crate::types::{
    CorrelationData, Pattern, Symptom, SymptomRecord, Thresholds, TrendData, TriggerData,
    TriggerMetric,
};

/// A correlated symptom pair and its sentence for each sign of r
struct CorrelationPair {
    symptoms: [Symptom; 2],
    positive: &'static str,
    negative: &'static str,
}

impl CorrelationPair {
    /// Sentence for r; zero reads as negative
    fn description(&self, r: f64) -> &'static str {
        if r > 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

/// Correlated symptom pairs, in reporting order
const CORRELATION_PAIRS: [CorrelationPair; 2] = [
    CorrelationPair {
        symptoms: [Symptom::Pain, Symptom::Mood],
        positive: "Higher pain levels are associated with higher mood scores",
        negative: "Higher pain levels are associated with lower mood scores",
    },
    CorrelationPair {
        symptoms: [Symptom::Energy, Symptom::Sleep],
        positive: "Better sleep quality is associated with higher energy levels",
        negative: "Better sleep quality is associated with lower energy levels",
    },
];

/// Per-trigger occurrence tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerTally {
    pub total: usize,
    pub high_pain: usize,
    pub low_mood: usize,
}

/// Stateless analysis engine
#[derive(Debug, Clone, Default)]
pub struct PatternEngine {
    thresholds: Thresholds,
}

impl PatternEngine {
    /// Engine with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom thresholds
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Run all passes; empty when the window is too small
    pub fn analyze(&self, entries: &[SymptomRecord]) -> Vec<Pattern> {
        if entries.len() < self.thresholds.min_entries {
            debug!(
                entries = entries.len(),
                min = self.thresholds.min_entries,
                "too few entries for analysis"
            );
            return Vec::new();
        }

        let mut patterns = self.analyze_correlations(entries);
        patterns.extend(self.analyze_trends(entries));
        patterns.extend(self.analyze_triggers(entries));

        debug!(entries = entries.len(), patterns = patterns.len(), "analysis complete");
        patterns
    }

    /// Correlation pass
    pub fn analyze_correlations(&self, entries: &[SymptomRecord]) -> Vec<Pattern> {
        let mut patterns = Vec::new();

        for pair in &CORRELATION_PAIRS {
            let [a, b] = pair.symptoms;
            let r = pearson(&series(entries, a), &series(entries, b));
            debug!(pair = %format!("{a}/{b}"), r, "correlation");

            if r.abs() > self.thresholds.correlation {
                patterns.push(Pattern::Correlation {
                    description: pair.description(r).to_string(),
                    confidence: r.abs().min(1.0),
                    data: CorrelationData {
                        correlation: r,
                        symptoms: pair.symptoms,
                    },
                });
            }
        }

        patterns
    }

    /// Trend pass
    pub fn analyze_trends(&self, entries: &[SymptomRecord]) -> Vec<Pattern> {
        let mut patterns = Vec::new();

        for symptom in Symptom::ALL {
            let trend = index_slope(&series(entries, symptom));
            debug!(%symptom, trend, "trend");

            if trend.abs() > self.thresholds.trend_slope {
                let direction = if trend > 0.0 { "increasing" } else { "decreasing" };
                patterns.push(Pattern::Trend {
                    description: format!(
                        "{} levels have been {} over time",
                        symptom.capitalized(),
                        direction
                    ),
                    confidence: (trend.abs() * self.thresholds.trend_confidence_scale).min(1.0),
                    data: TrendData {
                        trend,
                        symptom,
                        values: entries.iter().map(|e| e.value(symptom)).collect(),
                    },
                });
            }
        }

        patterns
    }

    /// Trigger pass
    pub fn analyze_triggers(&self, entries: &[SymptomRecord]) -> Vec<Pattern> {
        let mut patterns = Vec::new();
        let tallies = self.tally_triggers(entries);
        debug!(triggers = tallies.len(), "trigger tallies");

        for (trigger, tally) in tallies {
            if tally.total < self.thresholds.trigger_min_occurrences {
                continue;
            }
            let total = tally.total as f64;

            let pain_ratio = tally.high_pain as f64 / total;
            if pain_ratio > self.thresholds.trigger_ratio {
                patterns.push(trigger_pattern(
                    &trigger,
                    TriggerMetric::Pain,
                    pain_ratio,
                    tally.total,
                ));
            }

            let mood_ratio = tally.low_mood as f64 / total;
            if mood_ratio > self.thresholds.trigger_ratio {
                patterns.push(trigger_pattern(
                    &trigger,
                    TriggerMetric::Mood,
                    mood_ratio,
                    tally.total,
                ));
            }
        }

        patterns
    }

    /// Count every trigger occurrence, in order of first appearance
    pub fn tally_triggers(&self, entries: &[SymptomRecord]) -> Vec<(String, TriggerTally)> {
        let mut order: Vec<(String, TriggerTally)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let high_pain = entry.pain >= self.thresholds.high_pain_level;
            let low_mood = entry.mood <= self.thresholds.low_mood_level;

            for trigger in &entry.triggers {
                let slot = *index.entry(trigger.as_str()).or_insert_with(|| {
                    order.push((trigger.clone(), TriggerTally::default()));
                    order.len() - 1
                });
                let tally = &mut order[slot].1;
                tally.total += 1;
                if high_pain {
                    tally.high_pain += 1;
                }
                if low_mood {
                    tally.low_mood += 1;
                }
            }
        }

        order
    }
}

/// One symptom's scores as floats, in entry order
fn series(entries: &[SymptomRecord], symptom: Symptom) -> Vec<f64> {
    entries.iter().map(|e| e.value(symptom) as f64).collect()
}

fn trigger_pattern(
    trigger: &str,
    metric: TriggerMetric,
    ratio: f64,
    occurrences: usize,
) -> Pattern {
    let association = match metric {
        TriggerMetric::Pain => "higher pain levels",
        TriggerMetric::Mood => "lower mood",
    };
    Pattern::Trigger {
        description: format!("{} appears to be associated with {}", trigger, association),
        confidence: ratio,
        data: TriggerData {
            trigger: trigger.to_string(),
            metric,
            ratio,
            occurrences,
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use crate::types::PatternKind;

    fn day(i: usize) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + Duration::days(i as i64)
    }

    /// Entries with the given pain values and everything else at 5
    fn pain_series(pains: &[u8]) -> Vec<SymptomRecord> {
        pains
            .iter()
            .enumerate()
            .map(|(i, &p)| SymptomRecord::new(day(i), p, 5, 5, 5))
            .collect()
    }

    #[test]
    fn test_too_few_entries() {
        let engine = PatternEngine::new();
        assert!(engine.analyze(&[]).is_empty());
        assert!(engine.analyze(&pain_series(&[10, 9, 8, 7, 6, 5])).is_empty());
    }

    #[test]
    fn test_min_entries_applies_to_whole_window() {
        // Exactly 7 entries is enough
        let engine = PatternEngine::new();
        let patterns = engine.analyze(&pain_series(&[10, 9, 8, 7, 6, 5, 4]));
        assert!(!patterns.is_empty());
    }

    #[test]
    fn test_flat_series_yields_nothing() {
        let engine = PatternEngine::new();
        assert!(engine.analyze(&pain_series(&[6; 12])).is_empty());
    }

    #[test]
    fn test_pain_mood_negative_correlation() {
        let engine = PatternEngine::new();
        let pains = [8, 7, 9, 8, 7, 9, 8];
        let moods = [3, 4, 2, 3, 4, 2, 3];
        let entries: Vec<_> = pains
            .iter()
            .zip(moods)
            .enumerate()
            .map(|(i, (&p, m))| SymptomRecord::new(day(i), p, m, 5, 5))
            .collect();

        let patterns = engine.analyze_correlations(&entries);
        assert_eq!(patterns.len(), 1);
        match &patterns[0] {
            Pattern::Correlation { description, confidence, data } => {
                assert_eq!(description, "Higher pain levels are associated with lower mood scores");
                assert!(data.correlation < -0.5);
                assert!((confidence - data.correlation.abs()).abs() < 1e-12);
                assert_eq!(data.symptoms, [Symptom::Pain, Symptom::Mood]);
            }
            other => panic!("expected correlation, got {:?}", other),
        }
    }

    #[test]
    fn test_energy_sleep_phrasing() {
        let engine = PatternEngine::new();
        let together: Vec<_> = (0..8)
            .map(|i| SymptomRecord::new(day(i), 5, 5, (i % 4 + 3) as u8, (i % 4 + 4) as u8))
            .collect();
        let patterns = engine.analyze_correlations(&together);
        assert_eq!(patterns.len(), 1);
        assert_eq!(
            patterns[0].description(),
            "Better sleep quality is associated with higher energy levels"
        );

        let opposed: Vec<_> = (0..8)
            .map(|i| SymptomRecord::new(day(i), 5, 5, (i % 4 + 3) as u8, (8 - i % 4) as u8))
            .collect();
        let patterns = engine.analyze_correlations(&opposed);
        assert_eq!(patterns.len(), 1);
        assert_eq!(
            patterns[0].description(),
            "Better sleep quality is associated with lower energy levels"
        );
    }

    #[test]
    fn test_pain_mood_positive_phrasing() {
        let engine = PatternEngine::new();
        let entries: Vec<_> = [8, 7, 9, 8, 7, 9, 8]
            .into_iter()
            .enumerate()
            .map(|(i, p)| SymptomRecord::new(day(i), p, p - 1, 5, 5))
            .collect();

        let patterns = engine.analyze_correlations(&entries);
        assert_eq!(patterns.len(), 1);
        assert_eq!(
            patterns[0].description(),
            "Higher pain levels are associated with higher mood scores"
        );
    }

    #[test]
    fn test_every_pair_has_its_own_sentences() {
        for pair in &CORRELATION_PAIRS {
            let [a, b] = pair.symptoms;
            assert_eq!(pair.description(0.9), pair.positive);
            assert_eq!(pair.description(-0.9), pair.negative);
            assert_ne!(pair.positive, pair.negative);
            assert!(pair.positive.contains(b.name()), "{a}/{b}: {}", pair.positive);
        }
    }

    #[test]
    fn test_decreasing_trend() {
        let engine = PatternEngine::new();
        let entries = pain_series(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let patterns = engine.analyze_trends(&entries);

        assert_eq!(patterns.len(), 1);
        match &patterns[0] {
            Pattern::Trend { description, confidence, data } => {
                assert_eq!(description, "Pain levels have been decreasing over time");
                assert!((data.trend + 1.0).abs() < 1e-12);
                assert_eq!(*confidence, 1.0);
                assert_eq!(data.values, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
            }
            other => panic!("expected trend, got {:?}", other),
        }
    }

    #[test]
    fn test_trend_confidence_scales_with_slope() {
        let engine = PatternEngine::new();
        // slope 0.25 per entry
        let sleeps = [2, 2, 3, 3, 3, 3, 4, 4, 4, 5];
        let entries: Vec<_> = sleeps
            .iter()
            .enumerate()
            .map(|(i, &s)| SymptomRecord::new(day(i), 5, 5, 5, s))
            .collect();
        let patterns = engine.analyze_trends(&entries);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].description(), "Sleep levels have been increasing over time");
        let Pattern::Trend { data, confidence, .. } = &patterns[0] else {
            panic!("expected trend");
        };
        assert!(data.trend > 0.1 && data.trend < 0.5);
        assert!((confidence - data.trend * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_trigger_needs_three_occurrences() {
        let engine = PatternEngine::new();
        let mut entries = pain_series(&[9, 9, 5, 5, 5, 5, 5, 5]);
        entries[0].triggers = vec!["Weather".into()];
        entries[1].triggers = vec!["Weather".into()];
        assert!(engine.analyze_triggers(&entries).is_empty());
    }

    #[test]
    fn test_trigger_pain_and_mood_both_fire() {
        let engine = PatternEngine::new();
        let mut entries: Vec<_> = (0..10).map(|i| SymptomRecord::new(day(i), 4, 7, 5, 5)).collect();
        for i in [1, 3, 5] {
            entries[i].pain = 8;
            entries[i].mood = 3;
            entries[i].triggers = vec!["Work".into()];
        }

        let patterns = engine.analyze_triggers(&entries);
        assert_eq!(patterns.len(), 2);
        assert_eq!(
            patterns[0].description(),
            "Work appears to be associated with higher pain levels"
        );
        assert_eq!(patterns[1].description(), "Work appears to be associated with lower mood");
        for p in &patterns {
            assert_eq!(p.kind(), PatternKind::Trigger);
            assert_eq!(p.confidence(), 1.0);
        }
    }

    #[test]
    fn test_trigger_ratio_is_strict() {
        // 3 of 5 high-pain days is exactly 0.6, not enough
        let engine = PatternEngine::new();
        let mut entries: Vec<_> = (0..8).map(|i| SymptomRecord::new(day(i), 3, 6, 5, 5)).collect();
        for i in 0..5 {
            entries[i].triggers = vec!["Diet".into()];
        }
        for i in 0..3 {
            entries[i].pain = 7;
        }
        assert!(engine.analyze_triggers(&entries).is_empty());
    }

    #[test]
    fn test_duplicate_triggers_in_one_entry_count_twice() {
        let engine = PatternEngine::new();
        let mut entries = pain_series(&[5, 5, 5]);
        entries[0].triggers = vec!["Stress".into(), "Stress".into()];
        entries[2].triggers = vec!["Stress".into()];
        let tallies = engine.tally_triggers(&entries);
        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[0].1.total, 3);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let engine = PatternEngine::new();
        let mut entries = pain_series(&[5, 5]);
        entries[0].triggers = vec!["Weather".into(), "Diet".into()];
        entries[1].triggers = vec!["Alcohol".into(), "Weather".into()];
        let names: Vec<_> = engine
            .tally_triggers(&entries)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Weather", "Diet", "Alcohol"]);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds {
            min_entries: 3,
            ..Thresholds::default()
        };
        let engine = PatternEngine::with_thresholds(thresholds);
        let patterns = engine.analyze(&pain_series(&[9, 6, 3]));
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].kind(), PatternKind::Trend);
    }
}
