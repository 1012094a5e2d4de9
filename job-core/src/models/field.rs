use std::fmt;

use thiserror::Error;

/// Errors produced when a change event names something the form does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("unknown position '{0}'")]
    UnknownPosition(String),

    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
}

/// Every input on the application form, in the order it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    InterviewTime,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::FullName,
            Field::Email,
            Field::PhoneNumber,
            Field::Position,
            Field::RelevantExperience,
            Field::PortfolioUrl,
            Field::ManagementExperience,
            Field::AdditionalSkills,
            Field::InterviewTime,
        ]
    }

    /// The `name` attribute used by change events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioURL",
            Self::ManagementExperience => "managementExperience",
            Self::AdditionalSkills => "additionalSkills",
            Self::InterviewTime => "interviewTime",
        }
    }

    /// Human-readable label, also used as the subject of validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::InterviewTime => "Preferred Interview Time",
        }
    }

    /// Fields whose visibility depends on the selected position.
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            Self::RelevantExperience | Self::PortfolioUrl | Self::ManagementExperience
        )
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.name() == s)
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Field {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| ParseFieldError::UnknownField(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_round_trip_through_parse() {
        for field in Field::all() {
            assert_eq!(Field::try_from(field.name()), Ok(*field));
        }
    }

    #[test]
    fn portfolio_url_keeps_upper_case_suffix() {
        assert_eq!(Field::parse("portfolioURL"), Some(Field::PortfolioUrl));
        assert_eq!(Field::parse("portfolioUrl"), None);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            Field::try_from("salary"),
            Err(ParseFieldError::UnknownField("salary".to_string()))
        );
    }

    #[test]
    fn exactly_three_fields_are_conditional() {
        let conditional: Vec<_> = Field::all()
            .iter()
            .filter(|f| f.is_conditional())
            .copied()
            .collect();
        assert_eq!(
            conditional,
            vec![
                Field::RelevantExperience,
                Field::PortfolioUrl,
                Field::ManagementExperience
            ]
        );
    }
}
