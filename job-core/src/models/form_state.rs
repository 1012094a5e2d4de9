//! The values captured by the form for one application attempt.

use std::collections::BTreeSet;

use crate::models::{Field, Position, Skill};

/// Everything the applicant has entered so far.
///
/// Values are stored exactly as typed. Nothing here is validated; see
/// [`crate::validation::validate`] for the rules applied on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Option<Position>,

    // Conditional fields. Switching position leaves these untouched, so they
    // may hold values for a role that is no longer selected.
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,

    pub additional_skills: BTreeSet<Skill>,
    /// Local date-time as produced by the picker, e.g. `2024-01-01T10:00`.
    pub interview_time: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text value of a scalar field.
    ///
    /// `Position` yields its option value (`""` when unselected);
    /// `AdditionalSkills` has no single text value and yields `None`.
    pub fn text(
        &self,
        field: Field,
    ) -> Option<&str> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::Position => Some(self.position.map_or("", |p| p.as_str())),
            Field::RelevantExperience => Some(&self.relevant_experience),
            Field::PortfolioUrl => Some(&self.portfolio_url),
            Field::ManagementExperience => Some(&self.management_experience),
            Field::InterviewTime => Some(&self.interview_time),
            Field::AdditionalSkills => None,
        }
    }

    /// Mutable access to a free-text field, `None` for position and skills.
    pub(crate) fn text_mut(
        &mut self,
        field: Field,
    ) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::RelevantExperience => Some(&mut self.relevant_experience),
            Field::PortfolioUrl => Some(&mut self.portfolio_url),
            Field::ManagementExperience => Some(&mut self.management_experience),
            Field::InterviewTime => Some(&mut self.interview_time),
            Field::Position | Field::AdditionalSkills => None,
        }
    }

    pub fn has_skill(
        &self,
        skill: Skill,
    ) -> bool {
        self.additional_skills.contains(&skill)
    }

    /// Sets or clears a skill to match the checkbox state.
    pub fn set_skill(
        &mut self,
        skill: Skill,
        checked: bool,
    ) {
        if checked {
            self.additional_skills.insert(skill);
        } else {
            self.additional_skills.remove(&skill);
        }
    }

    /// Skill values in catalog order, joined for display.
    pub fn skills_display(&self) -> String {
        self.additional_skills
            .iter()
            .map(Skill::value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
