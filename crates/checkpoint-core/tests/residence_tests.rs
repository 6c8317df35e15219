//! Residence detection integration tests
//!
//! Runs detection against the fixture case history and checks how a
//! confirmed match is carried into a new case.

mod common;

use checkpoint_core::{apply_residence, CheckpointConfig, ResidenceDetector};
use checkpoint_domain::{validate_case, CaseRecord, CaseStage};

#[test]
fn test_history_fixture_loads() {
    let history = common::load_case_history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].stage, CaseStage::Closed);
    assert!(history[0].registered_at.is_some());
    // missing stage and extras fall back to defaults
    assert_eq!(history[3].stage, CaseStage::Comptroller);
    assert!(history[3].extra_fields.is_empty());
}

#[test]
fn test_detects_returning_detainee() {
    let history = common::load_case_history();
    let detector = ResidenceDetector::default();

    let found = detector.detect(&history, "Juan Perez").unwrap();
    assert_eq!(found.record.folio, "CP-2024-0001");
    assert_eq!(found.similarity, 100.0);

    let summary = found.summary();
    assert_eq!(summary.folio, "CP-2024-0001");
    assert_eq!(summary.phone.as_deref(), Some("5512345678"));
    assert_eq!(summary.plate.as_deref(), Some("ABC-1234"));
    assert_eq!(summary.age, Some(34));
}

#[test]
fn test_detects_partial_long_name() {
    let history = common::load_case_history();
    let found = ResidenceDetector::default()
        .detect(&history, "José Luis Garza")
        .unwrap();

    assert_eq!(found.record.folio, "CP-2024-0003");
    assert!(found.similarity > 80.0 && found.similarity < 85.0, "got {}", found.similarity);
    assert_eq!(found.matched_words, vec!["jose", "luis", "garza"]);
}

#[test]
fn test_configured_threshold() {
    let history = common::load_case_history();
    let config = CheckpointConfig::from_toml("[residence]\nthreshold = 90.0\n").unwrap();
    let detector = config.residence_detector();

    assert!(detector.detect(&history, "José Luis Garza").is_none());
    assert!(detector.detect(&history, "maria guadalupe hernandez").is_some());
}

#[test]
fn test_new_name_has_no_history() {
    let history = common::load_case_history();
    let detector = ResidenceDetector::default();
    assert!(detector.detect(&history, "Xochitl Ugalde").is_none());
    assert!(detector.detect(&history, "").is_none());
    assert!(detector.detect(&[], "Juan Perez").is_none());
}

#[test]
fn test_confirmed_match_fills_new_case() {
    let history = common::load_case_history();
    let found = ResidenceDetector::default()
        .detect(&history, "Juan Perez")
        .unwrap();

    let mut draft = CaseRecord::new("CP-2024-0100", "Juan Perez");
    apply_residence(&mut draft, found.record);

    assert!(draft.is_repeat_offense());
    assert_eq!(draft.residence_folio.as_deref(), Some("CP-2024-0001"));
    assert_eq!(draft.phone.as_deref(), Some("5512345678"));
    assert_eq!(draft.plate.as_deref(), Some("ABC-1234"));
    assert_eq!(draft.age, Some(34));
    assert_eq!(draft.attribute("address"), Some("Calle Hidalgo 12, Col. Centro"));
    assert_eq!(draft.attribute("license_number"), Some("LIC-889120"));
    // the new case keeps its own identity and stage
    assert_eq!(draft.folio, "CP-2024-0100");
    assert_eq!(draft.stage, CaseStage::Comptroller);
    assert!(validate_case(&draft).is_empty());
}

#[test]
fn test_partial_history_keeps_draft_values() {
    let history = common::load_case_history();
    let rosa = ResidenceDetector::default()
        .detect(&history, "rosa diaz")
        .unwrap();

    let mut draft = CaseRecord::new("CP-2024-0101", "Rosa Diaz")
        .with_plate("RDZ-5521")
        .with_age(52);
    apply_residence(&mut draft, rosa.record);

    assert_eq!(draft.phone.as_deref(), Some("5544332211"));
    assert_eq!(draft.plate.as_deref(), Some("RDZ-5521"));
    assert_eq!(draft.age, Some(52));
    assert_eq!(draft.residence_folio.as_deref(), Some("CP-2024-0004"));
}
