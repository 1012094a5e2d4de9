//! Read-only summary shown after a successful submit.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::models::{Field, FormState};
use crate::visibility::visible_fields;

const INTERVIEW_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

// chrono accepts single-digit fields; a picker value never has them.
static INTERVIEW_TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(?::\d{2})?$")
        .expect("interview time pattern is valid")
});

/// One `label: value` row of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
}

/// The captured application, limited to the fields relevant to the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    lines: Vec<SummaryLine>,
}

impl Summary {
    pub const TITLE: &'static str = "Form Summary";

    pub fn from_state(state: &FormState) -> Self {
        let conditional = visible_fields(state.position);
        let mut lines = Vec::with_capacity(Field::all().len());

        for &field in Field::all() {
            if field.is_conditional() && !conditional.contains(&field) {
                continue;
            }
            let value = match field {
                Field::RelevantExperience => format!("{} years", state.relevant_experience),
                Field::AdditionalSkills => state.skills_display(),
                Field::InterviewTime => format_interview_time(&state.interview_time),
                other => state.text(other).unwrap_or_default().to_string(),
            };
            lines.push(SummaryLine {
                field,
                label: field.label(),
                value,
            });
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    pub fn get(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.field == field)
            .map(|line| line.value.as_str())
    }

    pub fn contains(
        &self,
        field: Field,
    ) -> bool {
        self.get(field).is_some()
    }
}

impl fmt::Display for Summary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", Self::TITLE)?;
        for line in &self.lines {
            write!(f, "\n{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

/// Reads a `datetime-local` style value (`YYYY-MM-DDTHH:MM[:SS]`).
pub fn parse_interview_time(raw: &str) -> Option<NaiveDateTime> {
    if !INTERVIEW_TIME_SHAPE.is_match(raw) {
        return None;
    }
    INTERVIEW_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// The value a date-time picker reports for `raw`: the text itself once it is
/// a complete local date-time, `""` while it is partial or invalid.
pub fn interview_time_value(raw: &str) -> &str {
    if parse_interview_time(raw).is_some() { raw } else { "" }
}

/// Renders a picker value such as `2024-01-01T10:00` as `1/1/2024, 10:00:00 AM`.
///
/// Values that are not a local date-time render as `Invalid Date`.
pub fn format_interview_time(raw: &str) -> String {
    parse_interview_time(raw)
        .map(|dt| dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}
