//! Validation for case records

use super::CaseRecord;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Z0-9-]{5,10}$").unwrap();
}

/// Youngest and oldest plausible detainee ages
const MIN_AGE: u32 = 16;
const MAX_AGE: u32 = 110;

/// Severity of a validation error
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn new(field: &str, message: &str, severity: ValidationSeverity) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

/// Validate a case and return errors/warnings
pub fn validate_case(case: &CaseRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Required fields
    if case.folio.trim().is_empty() {
        errors.push(ValidationError::new(
            "folio",
            "Folio is required",
            ValidationSeverity::Error,
        ));
    }

    if case.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "name",
            "Detainee name is required",
            ValidationSeverity::Error,
        ));
    }

    if let Some(age) = case.age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            errors.push(ValidationError::new(
                "age",
                "Age is outside the plausible range",
                ValidationSeverity::Warning,
            ));
        }
    }

    if let Some(ref plate) = case.plate {
        if !PLATE_RE.is_match(&plate.trim().to_uppercase()) {
            errors.push(ValidationError::new(
                "plate",
                "Plate should be 5-10 letters, digits or dashes",
                ValidationSeverity::Warning,
            ));
        }
    }

    if let Some(ref phone) = case.phone {
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits != 10 {
            errors.push(ValidationError::new(
                "phone",
                "Phone should have 10 digits",
                ValidationSeverity::Warning,
            ));
        }
    }

    if case.stage.is_closed() && case.registered_at.is_none() {
        errors.push(ValidationError::new(
            "registered_at",
            "Closed case has no registration date",
            ValidationSeverity::Info,
        ));
    }

    errors
}

/// Check if a case is valid (no errors)
pub fn is_valid(case: &CaseRecord) -> bool {
    validate_case(case)
        .iter()
        .all(|e| e.severity != ValidationSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_validate_empty_case() {
        let case = CaseRecord::new("", "  ");
        let errors = validate_case(&case);
        assert!(errors.iter().any(|e| e.field == "folio"));
        assert!(errors.iter().any(|e| e.field == "name"));
        assert!(!is_valid(&case));
    }

    #[test]
    fn test_complete_case_is_clean() {
        let case = CaseRecord::new("F-010", "Luis Hernández")
            .with_phone("55 1234 5678")
            .with_plate("abc-1234")
            .with_age(41);
        assert!(validate_case(&case).is_empty());
        assert!(is_valid(&case));
    }

    #[rstest]
    #[case(Some(15), true)]
    #[case(Some(16), false)]
    #[case(Some(110), false)]
    #[case(Some(111), true)]
    #[case(None, false)]
    fn test_age_warning(#[case] age: Option<u32>, #[case] warned: bool) {
        let mut case = CaseRecord::new("F-011", "Rosa Díaz");
        case.age = age;
        let errors = validate_case(&case);
        assert_eq!(errors.iter().any(|e| e.field == "age"), warned);
        assert!(is_valid(&case));
    }

    #[rstest]
    #[case("XYZ-987", false)]
    #[case("AB1", true)]
    #[case("PLATE*99", true)]
    fn test_plate_format(#[case] plate: &str, #[case] warned: bool) {
        let case = CaseRecord::new("F-012", "Pedro Gil").with_plate(plate);
        let errors = validate_case(&case);
        assert_eq!(
            errors
                .iter()
                .any(|e| e.field == "plate" && e.severity == ValidationSeverity::Warning),
            warned
        );
    }

    #[test]
    fn test_closed_case_without_date_is_info() {
        use crate::CaseStage;

        let case = CaseRecord::new("F-014", "Rosa Díaz").with_stage(CaseStage::Closed);
        let errors = validate_case(&case);
        assert!(errors
            .iter()
            .any(|e| e.field == "registered_at" && e.severity == ValidationSeverity::Info));
        assert!(is_valid(&case));

        let open = CaseRecord::new("F-015", "Rosa Díaz").with_stage(CaseStage::Courts);
        assert!(validate_case(&open).is_empty());
    }

    #[test]
    fn test_short_phone_is_warning() {
        let case = CaseRecord::new("F-013", "Elena Soto").with_phone("12345");
        let errors = validate_case(&case);
        assert!(errors.iter().any(|e| e.field == "phone"));
        assert!(is_valid(&case));
    }
}
