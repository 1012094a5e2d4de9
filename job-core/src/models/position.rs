use std::fmt;

use crate::models::ParseFieldError;

/// The role an applicant is applying for.
///
/// The select control also offers an empty "Select" option; that state is
/// represented as `Option::<Position>::None` rather than a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub fn all() -> &'static [Position] {
        &[Position::Developer, Position::Designer, Position::Manager]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Developer" => Some(Self::Developer),
            "Designer" => Some(Self::Designer),
            "Manager" => Some(Self::Manager),
            _ => None,
        }
    }

    /// Parses a select option value, where `""` means nothing is selected.
    pub fn parse_option(s: &str) -> Result<Option<Self>, ParseFieldError> {
        if s.is_empty() {
            return Ok(None);
        }
        Self::parse(s)
            .map(Some)
            .ok_or_else(|| ParseFieldError::UnknownPosition(s.to_string()))
    }

    /// Developers and designers are asked for their years of experience.
    pub fn requires_experience(&self) -> bool {
        matches!(self, Self::Developer | Self::Designer)
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Position {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| ParseFieldError::UnknownPosition(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_matches_as_str() {
        for position in Position::all() {
            assert_eq!(Position::parse(position.as_str()), Some(*position));
        }
    }

    #[test]
    fn parse_option_treats_empty_as_unselected() {
        assert_eq!(Position::parse_option("").unwrap(), None);
        assert_eq!(
            Position::parse_option("Manager").unwrap(),
            Some(Position::Manager)
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Position::parse("developer").is_none());
        assert!(matches!(
            Position::parse_option("Intern"),
            Err(ParseFieldError::UnknownPosition(v)) if v == "Intern"
        ));
    }

    #[test]
    fn only_technical_roles_require_experience() {
        assert!(Position::Developer.requires_experience());
        assert!(Position::Designer.requires_experience());
        assert!(!Position::Manager.requires_experience());
    }
}
