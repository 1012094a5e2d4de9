//! Submit-time validation rules for the application form.
//!
//! Every rule is evaluated independently, so one pass reports a problem for
//! every field that has one. Conditional fields are only checked when the
//! selected position shows them.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{Field, FormState};
use crate::utils::{is_numeric, parse_number};
use crate::visibility::visible_fields;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static PORTFOLIO_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+\.\S+$").expect("portfolio pattern is valid"));

/// A problem with a single field, shown inline next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("{} is invalid", .0.label())]
    InvalidFormat(Field),

    #[error("{} must be a valid number", .0.label())]
    NotANumber(Field),

    #[error("{} must be greater than 0", .0.label())]
    NotPositive(Field),

    #[error("At least one skill must be selected")]
    NoneSelected(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field)
            | Self::InvalidFormat(field)
            | Self::NotANumber(field)
            | Self::NotPositive(field)
            | Self::NoneSelected(field) => *field,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_) | Self::NoneSelected(_))
    }
}

/// Validation feedback keyed by field. Empty means the form can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(
        &mut self,
        error: ValidationError,
    ) {
        self.errors.insert(error.field(), error);
    }

    pub fn get(
        &self,
        field: Field,
    ) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(
        &self,
        field: Field,
    ) -> bool {
        self.errors.contains_key(&field)
    }

    /// The message to render under `field`, if it has one.
    pub fn message(
        &self,
        field: Field,
    ) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with errors, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Runs every rule against `state` and collects the failures.
///
/// Pure: the same state always produces the same map.
pub fn validate(state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let conditional = visible_fields(state.position);

    if state.full_name.is_empty() {
        errors.insert(ValidationError::Required(Field::FullName));
    }

    if state.email.is_empty() {
        errors.insert(ValidationError::Required(Field::Email));
    } else if !EMAIL_PATTERN.is_match(&state.email) {
        errors.insert(ValidationError::InvalidFormat(Field::Email));
    }

    if state.phone_number.is_empty() {
        errors.insert(ValidationError::Required(Field::PhoneNumber));
    } else if !is_numeric(&state.phone_number) {
        errors.insert(ValidationError::NotANumber(Field::PhoneNumber));
    }

    if conditional.contains(&Field::RelevantExperience) {
        if state.relevant_experience.is_empty() {
            errors.insert(ValidationError::Required(Field::RelevantExperience));
        } else if is_non_positive(&state.relevant_experience) {
            errors.insert(ValidationError::NotPositive(Field::RelevantExperience));
        }
    }

    if conditional.contains(&Field::PortfolioUrl) {
        if state.portfolio_url.is_empty() {
            errors.insert(ValidationError::Required(Field::PortfolioUrl));
        } else if !PORTFOLIO_URL_PATTERN.is_match(&state.portfolio_url) {
            errors.insert(ValidationError::InvalidFormat(Field::PortfolioUrl));
        }
    }

    if conditional.contains(&Field::ManagementExperience) && state.management_experience.is_empty()
    {
        errors.insert(ValidationError::Required(Field::ManagementExperience));
    }

    if state.additional_skills.is_empty() {
        errors.insert(ValidationError::NoneSelected(Field::AdditionalSkills));
    }

    if state.interview_time.is_empty() {
        errors.insert(ValidationError::Required(Field::InterviewTime));
    }

    errors
}

// Text that is not a number at all is not flagged here.
fn is_non_positive(value: &str) -> bool {
    parse_number(value).is_ok_and(|n| n <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Skill};
    use pretty_assertions::assert_eq;

    fn valid_state() -> FormState {
        let mut state = FormState {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.org".into(),
            phone_number: "5550100".into(),
            interview_time: "2024-03-05T14:30".into(),
            ..Default::default()
        };
        state.set_skill(Skill::Python, true);
        state
    }

    #[test]
    fn valid_state_without_position_passes() {
        assert!(validate(&valid_state()).is_empty());
    }

    #[test]
    fn required_messages_use_field_labels() {
        let errors = validate(&FormState::new());
        assert_eq!(
            errors.message(Field::FullName).as_deref(),
            Some("Full Name is required")
        );
        assert_eq!(
            errors.message(Field::PhoneNumber).as_deref(),
            Some("Phone Number is required")
        );
        assert_eq!(
            errors.message(Field::AdditionalSkills).as_deref(),
            Some("At least one skill must be selected")
        );
        assert_eq!(
            errors.message(Field::InterviewTime).as_deref(),
            Some("Preferred Interview Time is required")
        );
    }

    #[test]
    fn email_pattern_is_unanchored() {
        let mut state = valid_state();
        state.email = "contact: ada@example.org".into();
        assert!(!validate(&state).contains(Field::Email));

        state.email = "ada@example".into();
        assert_eq!(
            validate(&state).get(Field::Email),
            Some(&ValidationError::InvalidFormat(Field::Email))
        );
    }

    #[test]
    fn phone_must_be_numeric() {
        let mut state = valid_state();
        state.phone_number = "555-0100".into();
        assert_eq!(
            validate(&state).message(Field::PhoneNumber).as_deref(),
            Some("Phone Number must be a valid number")
        );
    }

    #[test]
    fn whitespace_only_phone_is_accepted() {
        let mut state = valid_state();
        state.phone_number = "   ".into();
        assert!(!validate(&state).contains(Field::PhoneNumber));
    }

    #[test]
    fn experience_must_be_positive_for_developers() {
        let mut state = valid_state();
        state.position = Some(Position::Developer);

        state.relevant_experience = "0".into();
        assert_eq!(
            validate(&state).message(Field::RelevantExperience).as_deref(),
            Some("Relevant Experience must be greater than 0")
        );

        state.relevant_experience = "-2".into();
        assert!(validate(&state).contains(Field::RelevantExperience));

        state.relevant_experience = "0.5".into();
        assert!(!validate(&state).contains(Field::RelevantExperience));
    }

    #[test]
    fn phone_with_digit_separators_is_not_a_number() {
        let mut state = valid_state();
        state.phone_number = "555_1234".into();
        assert_eq!(
            validate(&state).get(Field::PhoneNumber),
            Some(&ValidationError::NotANumber(Field::PhoneNumber))
        );
    }

    #[test]
    fn very_long_phone_digits_are_still_numeric() {
        let mut state = valid_state();
        state.phone_number = "1234567890123456789012345678901".into();
        assert!(!validate(&state).contains(Field::PhoneNumber));
    }

    #[test]
    fn tiny_negative_experience_is_not_positive() {
        let mut state = valid_state();
        state.position = Some(Position::Designer);
        state.portfolio_url = "https://jane.dev".into();
        state.relevant_experience = "-1e-30".into();
        assert_eq!(
            validate(&state).get(Field::RelevantExperience),
            Some(&ValidationError::NotPositive(Field::RelevantExperience))
        );
    }

    #[test]
    fn experience_with_underscore_is_not_read_as_a_number() {
        let mut state = valid_state();
        state.position = Some(Position::Developer);
        state.relevant_experience = "-1_0".into();
        assert!(!validate(&state).contains(Field::RelevantExperience));
    }

    #[test]
    fn non_numeric_experience_is_not_flagged() {
        let mut state = valid_state();
        state.position = Some(Position::Developer);
        state.relevant_experience = "lots".into();
        assert!(!validate(&state).contains(Field::RelevantExperience));
    }

    #[test]
    fn portfolio_requires_scheme_and_dot() {
        let mut state = valid_state();
        state.position = Some(Position::Designer);
        state.relevant_experience = "4".into();

        for bad in ["jane.dev", "ftp://jane.dev", "https://localhost", "https://jane .dev"] {
            state.portfolio_url = bad.into();
            assert_eq!(
                validate(&state).get(Field::PortfolioUrl),
                Some(&ValidationError::InvalidFormat(Field::PortfolioUrl)),
                "{bad} should be rejected"
            );
        }

        for good in ["http://jane.dev", "https://www.jane.dev/work"] {
            state.portfolio_url = good.into();
            assert!(validate(&state).is_empty(), "{good} should be accepted");
        }
    }

    #[test]
    fn hidden_fields_are_not_validated() {
        let mut state = valid_state();
        state.position = Some(Position::Manager);
        state.management_experience = "Ran a team of 6".into();
        state.relevant_experience = "-10".into();
        state.portfolio_url = "nonsense".into();
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn rules_are_not_short_circuited() {
        let mut state = FormState::new();
        state.email = "nope".into();
        state.phone_number = "abc".into();
        state.position = Some(Position::Designer);

        let errors = validate(&state);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![
                Field::FullName,
                Field::Email,
                Field::PhoneNumber,
                Field::RelevantExperience,
                Field::PortfolioUrl,
                Field::AdditionalSkills,
                Field::InterviewTime,
            ]
        );
    }

    #[test]
    fn required_errors_are_distinguishable() {
        assert!(ValidationError::Required(Field::Email).is_required());
        assert!(ValidationError::NoneSelected(Field::AdditionalSkills).is_required());
        assert!(!ValidationError::InvalidFormat(Field::Email).is_required());
    }
}
