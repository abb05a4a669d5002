//! Registration submission validation.
//!
//! Pure. Turns a raw form submission into a [`NewParticipant`] ready
//! for insertion, or rejects it with a specific [`ValidationError`].
//! Rules are applied in order and the first failure wins, so the user
//! always sees a single actionable message.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::types::LicenseGrade;

/// A raw registration submission, as received on the wire.
///
/// `age` is a strict JSON integer. The original form accepted string
/// ages with loose coercion; that path was deliberately dropped, so a
/// non-numeric age never reaches the validator.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub age: i64,
    #[serde(default)]
    pub has_license: bool,
    /// Grade label as submitted. Ignored entirely when `has_license`
    /// is false (see normalization rule 4).
    pub license_grade: Option<String>,
}

/// A validated, normalized record ready for persistence.
///
/// The id and creation timestamp are assigned at insert time by the
/// store layer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub name: String,
    pub age: i32,
    pub has_license: bool,
    pub license_grade: Option<LicenseGrade>,
}

/// Validate a registration submission.
///
/// Rules, in order (first failure wins):
///
/// 1. trimmed `name` must be non-empty -> [`ValidationError::MissingName`]
/// 2. `age` must be a positive integer -> [`ValidationError::InvalidAge`]
/// 3. if `has_license`, `license_grade` must be one of the four
///    recognized labels -> [`ValidationError::MissingGrade`]
/// 4. `license_grade` is forced to `None` whenever `has_license` is
///    false, regardless of what was submitted. This prevents stale
///    grade data from a toggled-off checkbox reaching the store.
pub fn validate(input: &RegistrationInput) -> Result<NewParticipant, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let age = i32::try_from(input.age).map_err(|_| ValidationError::InvalidAge)?;
    if age <= 0 {
        return Err(ValidationError::InvalidAge);
    }

    let license_grade = if input.has_license {
        let grade = input
            .license_grade
            .as_deref()
            .and_then(LicenseGrade::parse)
            .ok_or(ValidationError::MissingGrade)?;
        Some(grade)
    } else {
        None
    };

    Ok(NewParticipant {
        name: name.to_string(),
        age,
        has_license: input.has_license,
        license_grade,
    })
}
