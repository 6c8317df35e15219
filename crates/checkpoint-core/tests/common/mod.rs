//! Test fixture loading utilities

use std::path::PathBuf;

use checkpoint_domain::CaseRecord;
use serde_json::Value;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Loosely shaped records keyed by attribute name
#[allow(dead_code)]
pub fn load_name_records() -> Vec<Value> {
    serde_json::from_str(&load_fixture("names.json")).expect("names.json is a JSON array")
}

/// Earlier checkpoint cases
#[allow(dead_code)]
pub fn load_case_history() -> Vec<CaseRecord> {
    serde_json::from_str(&load_fixture("case_history.json"))
        .expect("case_history.json holds case records")
}
