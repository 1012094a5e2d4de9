//! Form state plus the submit / summary-dialog lifecycle.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Field, FormState, ParseFieldError, Position, Skill};
use crate::summary::Summary;
use crate::validation::{ErrorMap, ValidationError, validate};
use crate::visibility::{is_visible, visible_fields};

/// A change event that does not fit the form.
///
/// The rendered form never produces these; they guard the string-keyed
/// [`FormController::on_field_change`] entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Parse(#[from] ParseFieldError),

    #[error("field '{0}' does not take a text value")]
    NotText(Field),
}

/// Result of a submit attempt. Validation failures are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Summary),
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Owns the application form and decides what is shown.
///
/// Input handlers store values verbatim; nothing is validated until
/// [`submit`](Self::submit).
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    errors: ErrorMap,
    submitted: bool,
    show_modal: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Errors from the most recent submit attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(
        &self,
        field: Field,
    ) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_modal_open(&self) -> bool {
        self.show_modal
    }

    /// Conditional fields shown for the current position.
    pub fn visible_fields(&self) -> BTreeSet<Field> {
        visible_fields(self.state.position)
    }

    /// Whether `field` is rendered for the current position.
    pub fn is_visible(
        &self,
        field: Field,
    ) -> bool {
        is_visible(self.state.position, field)
    }

    /// Summary of the current values, once the form has been submitted.
    ///
    /// Built from live state, so edits made after submitting show up here.
    pub fn summary(&self) -> Option<Summary> {
        self.submitted.then(|| Summary::from_state(&self.state))
    }

    /// Applies a change event from a named input.
    ///
    /// For `additionalSkills`, `value` is the skill and `checked` says whether
    /// its box is now ticked. For every other field `checked` is ignored and
    /// `value` replaces the stored value.
    pub fn on_field_change(
        &mut self,
        name: &str,
        value: &str,
        checked: bool,
    ) -> Result<(), FormError> {
        let field = Field::try_from(name)?;
        match field {
            Field::AdditionalSkills => self.toggle_skill(Skill::try_from(value)?, checked),
            Field::Position => self.set_position(Position::parse_option(value)?),
            _ => self.set_text(field, value)?,
        }
        Ok(())
    }

    /// Replaces a free-text field.
    pub fn set_text(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let slot = self.state.text_mut(field).ok_or(FormError::NotText(field))?;
        *slot = value.into();
        debug!(field = field.name(), "field updated");
        Ok(())
    }

    /// Selects a position. Values already typed into conditional fields are kept.
    pub fn set_position(
        &mut self,
        position: Option<Position>,
    ) {
        self.state.position = position;
        debug!(position = ?position, shown = ?self.visible_fields(), "position selected");
    }

    pub fn toggle_skill(
        &mut self,
        skill: Skill,
        checked: bool,
    ) {
        self.state.set_skill(skill, checked);
        debug!(skill = skill.value(), checked, "skill toggled");
    }

    /// Validates the whole form and opens the summary when it passes.
    ///
    /// A rejected submit leaves `submitted` as it was and keeps the dialog
    /// closed.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.state);
        if errors.is_empty() {
            self.errors = errors;
            self.submitted = true;
            self.show_modal = true;
            let summary = Summary::from_state(&self.state);
            info!(position = ?self.state.position, "application submitted");
            SubmitOutcome::Accepted(summary)
        } else {
            warn!(count = errors.len(), "application has validation errors");
            for (field, error) in errors.iter() {
                debug!(
                    field = field.name(),
                    required = error.is_required(),
                    %error,
                    "validation error"
                );
            }
            self.errors = errors.clone();
            self.show_modal = false;
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Hides the summary dialog. Form values and `submitted` are untouched.
    pub fn close_modal(&mut self) {
        if self.show_modal {
            debug!("summary dialog closed");
        }
        self.show_modal = false;
    }
}
