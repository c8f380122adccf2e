//! Integration tests for the pattern engine
//!
//! Tests the full path: entries → PatternEngine::analyze → ordered patterns

use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use symtrack::core::PatternEngine;
use symtrack::types::{Pattern, PatternKind, Symptom, SymptomRecord, TriggerMetric};

fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(i as i64)
}

fn entry(i: usize, pain: u8, mood: u8, energy: u8, sleep: u8) -> SymptomRecord {
    SymptomRecord::new(day(i), pain, mood, energy, sleep)
}

/// A realistic month: pain eases, mood follows it inversely, stress days hurt
fn month_of_entries() -> Vec<SymptomRecord> {
    (0..30)
        .map(|i| {
            let pain = (9 - (i / 5) as u8).max(2);
            let mood = 11 - pain;
            let energy = (3 + (i % 5) as u8).min(10);
            let sleep = (4 + (i % 5) as u8).min(10);
            let mut record = entry(i, pain, mood, energy, sleep);
            if i % 7 == 0 {
                record.triggers = vec!["Stress".to_string()];
                record.pain = 9;
                record.mood = 2;
            }
            if i % 10 == 3 {
                record.triggers.push("Weather".to_string());
            }
            record
        })
        .collect()
}

#[test]
fn test_empty_and_six_entries_yield_nothing() {
    let engine = PatternEngine::new();
    assert!(engine.analyze(&[]).is_empty());

    let six: Vec<_> = (0..6).map(|i| entry(i, 10 - i as u8, 1 + i as u8, 5, 5)).collect();
    assert!(engine.analyze(&six).is_empty());
}

#[test]
fn test_zero_variance_pair_emits_no_correlation() {
    let engine = PatternEngine::new();
    // Pain constant, mood moving
    let entries: Vec<_> = (0..10).map(|i| entry(i, 6, (i % 5 + 3) as u8, 5, 5)).collect();
    let patterns = engine.analyze(&entries);
    assert!(patterns.iter().all(|p| p.kind() != PatternKind::Correlation));
}

#[test]
fn test_decreasing_pain_trend_only() {
    let engine = PatternEngine::new();
    let entries: Vec<_> = (0..10).map(|i| entry(i, 10 - i as u8, 5, 5, 5)).collect();
    let patterns = engine.analyze(&entries);

    assert_eq!(patterns.len(), 1);
    let Pattern::Trend { description, data, .. } = &patterns[0] else {
        panic!("expected a trend, got {:?}", patterns[0]);
    };
    assert_eq!(data.symptom, Symptom::Pain);
    assert!(data.trend < 0.0);
    assert!(description.contains("decreasing"));
}

#[test]
fn test_stress_trigger_full_confidence() {
    let engine = PatternEngine::new();
    let mut entries: Vec<_> = (0..10).map(|i| entry(i, 4, 6, 5, 5)).collect();
    for i in [0, 3, 6, 9] {
        entries[i].pain = 8;
        entries[i].triggers = vec!["Stress".to_string()];
    }
    // Rare trigger, only twice
    entries[1].triggers = vec!["Travel".to_string()];
    entries[2].triggers = vec!["Travel".to_string()];

    let triggers: Vec<_> = engine
        .analyze(&entries)
        .into_iter()
        .filter(|p| p.kind() == PatternKind::Trigger)
        .collect();

    assert_eq!(triggers.len(), 1);
    let Pattern::Trigger { confidence, data, .. } = &triggers[0] else {
        unreachable!()
    };
    assert_eq!(data.trigger, "Stress");
    assert_eq!(data.metric, TriggerMetric::Pain);
    assert_eq!(data.occurrences, 4);
    assert_eq!(*confidence, 1.0);
}

#[test]
fn test_confidence_always_in_unit_interval() {
    let engine = PatternEngine::new();
    let patterns = engine.analyze(&month_of_entries());
    assert!(!patterns.is_empty());
    for p in &patterns {
        assert!(
            (0.0..=1.0).contains(&p.confidence()),
            "confidence out of range: {:?}",
            p
        );
    }
}

#[test]
fn test_pass_order_and_determinism() {
    let engine = PatternEngine::new();
    let entries = month_of_entries();

    let first = engine.analyze(&entries);
    let second = engine.analyze(&entries);
    assert_eq!(first, second);

    let kinds: Vec<PatternKind> = first.iter().map(Pattern::kind).collect();
    let mut sorted = kinds.clone();
    sorted.sort_by_key(|k| match k {
        PatternKind::Correlation => 0,
        PatternKind::Trend => 1,
        PatternKind::Trigger => 2,
    });
    assert_eq!(kinds, sorted);
    assert!(kinds.contains(&PatternKind::Correlation));
    assert!(kinds.contains(&PatternKind::Trend));
    assert!(kinds.contains(&PatternKind::Trigger));
}

#[test]
fn test_strong_negative_pain_mood_scenario() {
    let engine = PatternEngine::new();
    let pains = [8, 7, 9, 8, 7, 9, 8];
    let moods = [3, 4, 2, 3, 4, 2, 3];
    let entries: Vec<_> = (0..7).map(|i| entry(i, pains[i], moods[i], 5, 5)).collect();

    let correlations: Vec<_> = engine
        .analyze(&entries)
        .into_iter()
        .filter(|p| p.kind() == PatternKind::Correlation)
        .collect();

    assert_eq!(correlations.len(), 1);
    let Pattern::Correlation { description, data, .. } = &correlations[0] else {
        unreachable!()
    };
    assert_eq!(description, "Higher pain levels are associated with lower mood scores");
    assert_eq!(data.symptoms, [Symptom::Pain, Symptom::Mood]);
    assert!(data.correlation < 0.0);
}

#[test]
fn test_input_is_not_mutated() {
    let engine = PatternEngine::new();
    let entries = month_of_entries();
    let before = entries.clone();
    engine.analyze(&entries);
    assert_eq!(entries, before);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = std::sync::Arc::new(PatternEngine::new());
    let expected = engine.analyze(&month_of_entries());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.analyze(&month_of_entries()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
