//! Repeat-offender ("residence") detection
//!
//! When a detainee name is entered for a new case, the history of earlier
//! cases is searched for the same person. A likely match is summarised for
//! the operator and, once confirmed, its details are copied into the new
//! case, which is then linked to the earlier folio.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use checkpoint_domain::CaseRecord;

use crate::similarity::SimilarityEngine;

/// Score a match must exceed before it is shown to the operator
pub const DEFAULT_RESIDENCE_THRESHOLD: f64 = 50.0;

/// Extension attributes carried over from the earlier case
pub const CARRIED_EXTRA_FIELDS: &[&str] = &["address", "license_number"];

/// What the operator sees when asked to confirm a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidenceSummary {
    pub folio: String,
    pub name: String,
    pub phone: Option<String>,
    pub plate: Option<String>,
    pub age: Option<u32>,
}

/// An earlier case that likely belongs to the same detainee
#[derive(Debug, Clone)]
pub struct ResidenceMatch<'a> {
    pub record: &'a CaseRecord,
    pub similarity: f64,
    pub matched_words: Vec<String>,
}

impl ResidenceMatch<'_> {
    pub fn summary(&self) -> ResidenceSummary {
        ResidenceSummary {
            folio: self.record.folio.clone(),
            name: self.record.name.clone(),
            phone: self.record.phone.clone(),
            plate: self.record.plate.clone(),
            age: self.record.age,
        }
    }
}

/// Looks up earlier cases for a detainee name
#[derive(Debug, Clone)]
pub struct ResidenceDetector {
    engine: SimilarityEngine,
    threshold: f64,
}

impl Default for ResidenceDetector {
    fn default() -> Self {
        Self::new(SimilarityEngine::default(), DEFAULT_RESIDENCE_THRESHOLD)
    }
}

impl ResidenceDetector {
    pub fn new(engine: SimilarityEngine, threshold: f64) -> Self {
        Self { engine, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the earlier case whose detainee name best matches `name`.
    ///
    /// Only matches scoring strictly above the threshold are reported.
    pub fn detect<'a>(&self, history: &'a [CaseRecord], name: &str) -> Option<ResidenceMatch<'a>> {
        let best = self.engine.find_most_similar(history, "name", name)?;

        // A NaN threshold compares as None and is rejected too
        if best.similarity.partial_cmp(&self.threshold) != Some(Ordering::Greater) {
            debug!(
                similarity = best.similarity,
                threshold = self.threshold,
                "best history match below residence threshold"
            );
            return None;
        }

        info!(
            folio = %best.item.folio,
            similarity = best.similarity,
            "possible repeat detainee"
        );

        Some(ResidenceMatch {
            record: best.item,
            similarity: best.similarity,
            matched_words: best.matched_words,
        })
    }
}

/// Copy the confirmed earlier case's details into `draft` and link it.
///
/// Phone, plate, age and the [`CARRIED_EXTRA_FIELDS`] are copied when the
/// earlier case has them; `residence_folio` is always set.
pub fn apply_residence(draft: &mut CaseRecord, matched: &CaseRecord) {
    if let Some(ref phone) = matched.phone {
        draft.phone = Some(phone.clone());
    }
    if let Some(ref plate) = matched.plate {
        draft.plate = Some(plate.clone());
    }
    if let Some(age) = matched.age {
        draft.age = Some(age);
    }

    for key in CARRIED_EXTRA_FIELDS {
        if let Some(value) = matched.extra_fields.get(*key) {
            draft.extra_fields.insert(key.to_string(), value.clone());
        }
    }

    draft.residence_folio = Some(matched.folio.clone());
}
