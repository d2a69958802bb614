//! Validation rules for leaving a step
//!
//! Two layers: per-step field completeness (what the screen requires before
//! "next" is enabled) and the contact validation that gates the final
//! submission. Routing validity is checked separately by the router.

use lazy_static::lazy_static;
use regex::Regex;

use crate::schemas::{keys, AnswerSet, StepId};

use super::steps::FieldKind;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]{7,15}$").expect("phone pattern is valid");
}

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Name must have more than one character after trimming
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() > 1
}

/// `local@domain.tld` shape, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Permissive international phone number: optional `+`, optional
/// parenthesised area code of 1-4 digits, then 7-15 digits or separators.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Validate a set of contact details
pub fn validate_contact(name: &str, email: &str, phone: &str) -> ValidationResult {
    if !is_valid_name(name) {
        return ValidationResult::failure("name must be at least two characters");
    }
    if !is_valid_email(email) {
        return ValidationResult::failure("email address is not valid");
    }
    if !is_valid_phone(phone) {
        return ValidationResult::failure("phone number is not valid");
    }
    ValidationResult::success()
}

/// Validate the contact answers stored in `answers`
pub fn validate_contact_answers(answers: &AnswerSet) -> ValidationResult {
    validate_contact(
        answers.text(keys::CONTACT_NAME).unwrap_or_default(),
        answers.text(keys::CONTACT_EMAIL).unwrap_or_default(),
        answers.text(keys::CONTACT_PHONE).unwrap_or_default(),
    )
}

/// Check that the fields of `step` are complete enough to move on.
///
/// Single choices and free text need a non-empty answer. Multi-selects and
/// the practical step may be left empty. Contact uses the contact rules.
pub fn validate_step_fields(step: StepId, answers: &AnswerSet) -> ValidationResult {
    match step.prompt().field {
        FieldKind::SingleChoice { key, .. } => {
            if answers.is_present(key) {
                ValidationResult::success()
            } else {
                ValidationResult::failure(format!("no option selected for {}", key))
            }
        }
        FieldKind::FreeText { key, .. } => {
            if answers.is_present(key) {
                ValidationResult::success()
            } else {
                ValidationResult::failure(format!("{} is empty", key))
            }
        }
        FieldKind::MultiChoice { .. } | FieldKind::Practical => ValidationResult::success(),
        FieldKind::Contact => validate_contact_answers(answers),
        FieldKind::Success => ValidationResult::failure("the request has already been sent"),
    }
}
