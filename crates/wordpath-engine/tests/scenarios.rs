//! Query scenarios with expected paths kept in `tests/data/scenarios.json`.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use wordpath_engine::{ManualClock, SearchEngine, SearchOptions, VocabularyStore};

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    vocabulary: Vec<String>,
    start: String,
    end: String,
    expected: Value,
}

fn load_scenarios() -> Vec<Scenario> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/scenarios.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

#[test]
fn scenarios_match_expected_paths() {
    let scenarios = load_scenarios();
    assert!(!scenarios.is_empty());

    let mut mismatches = Vec::new();
    for scenario in &scenarios {
        let mut engine = SearchEngine::with_clock(
            VocabularyStore::from_words(&scenario.vocabulary),
            SearchOptions::default(),
            ManualClock::new(),
        );
        let result = engine.find_path(&scenario.start, &scenario.end);
        let actual = serde_json::to_value(&result).unwrap();
        if actual != scenario.expected {
            mismatches.push(format!(
                "{}: expected {}, got {}",
                scenario.name, scenario.expected, actual
            ));
        }
    }

    if !mismatches.is_empty() {
        eprintln!("\n=== SCENARIO MISMATCHES: {}/{} ===", mismatches.len(), scenarios.len());
        for m in &mismatches {
            eprintln!("{m}");
        }
    }
    assert!(mismatches.is_empty());
}

#[test]
fn scenarios_are_stable_across_repeated_engines() {
    for scenario in load_scenarios() {
        let run = || {
            let mut engine = SearchEngine::with_clock(
                VocabularyStore::from_words(&scenario.vocabulary),
                SearchOptions::default(),
                ManualClock::new(),
            );
            engine.find_path(&scenario.start, &scenario.end)
        };
        assert_eq!(run(), run(), "{} is not deterministic", scenario.name);
    }
}
