//! Case record domain model

use super::CaseStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A roadside checkpoint detention case
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CaseRecord {
    pub id: String,
    pub folio: String,
    /// Detainee full name as entered at the checkpoint
    pub name: String,
    pub phone: Option<String>,
    pub plate: Option<String>,
    pub age: Option<u32>,

    #[serde(default)]
    pub stage: CaseStage,
    pub registered_at: Option<DateTime<Utc>>,

    /// Folio of the earlier case this detainee was matched to
    pub residence_folio: Option<String>,

    // Additional attributes (catch-all for department-specific fields)
    #[serde(default)]
    pub extra_fields: HashMap<String, String>,
}

impl CaseRecord {
    /// Create a new case with required fields
    pub fn new(folio: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            folio: folio.into(),
            name: name.into(),
            phone: None,
            plate: None,
            age: None,
            stage: CaseStage::default(),
            registered_at: None,
            residence_folio: None,
            extra_fields: HashMap::new(),
        }
    }

    /// Builder method to add a phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Builder method to add a vehicle plate
    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_stage(mut self, stage: CaseStage) -> Self {
        self.stage = stage;
        self
    }

    /// Builder method to add an extension attribute
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_fields.insert(key.into(), value.into());
        self
    }

    /// Look up a text attribute by name.
    ///
    /// Known text fields are checked first, then `extra_fields`. Numeric
    /// fields such as `age` are not text and resolve to `None`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(self.id.as_str()),
            "folio" => Some(self.folio.as_str()),
            "name" => Some(self.name.as_str()),
            "phone" => self.phone.as_deref(),
            "plate" => self.plate.as_deref(),
            "residence_folio" => self.residence_folio.as_deref(),
            _ => self.extra_fields.get(key).map(String::as_str),
        }
    }

    /// Whether this case was linked to an earlier case of the same detainee
    pub fn is_repeat_offense(&self) -> bool {
        self.residence_folio.is_some()
    }
}
