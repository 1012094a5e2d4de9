use std::fmt;

use crate::models::ParseFieldError;

/// One entry of the fixed "Additional Skills" checkbox catalog.
///
/// Variant order is the catalog order; `Ord` follows it so a
/// `BTreeSet<Skill>` iterates the way the checkboxes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Skill {
    Python,
    Java,
    Html5,
    Css,
    JavaScript,
    React,
    Angular,
    Node,
    MongoDb,
    MySql,
}

impl Skill {
    pub fn all() -> &'static [Skill] {
        &[
            Skill::Python,
            Skill::Java,
            Skill::Html5,
            Skill::Css,
            Skill::JavaScript,
            Skill::React,
            Skill::Angular,
            Skill::Node,
            Skill::MongoDb,
            Skill::MySql,
        ]
    }

    /// The value stored in the form state and echoed in the summary.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Html5 => "HTML5",
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
            Self::React => "reactjs",
            Self::Angular => "Angularjs",
            Self::Node => "Nodejs",
            Self::MongoDb => "MongoDB",
            Self::MySql => "MySQL",
        }
    }

    /// The text shown next to the checkbox.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Css => "CSS3",
            Self::React => "Reactjs",
            other => other.value(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|skill| skill.value() == s)
    }
}

impl fmt::Display for Skill {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl TryFrom<&str> for Skill {
    type Error = ParseFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| ParseFieldError::UnknownSkill(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_distinct_values() {
        let values: HashSet<_> = Skill::all().iter().map(Skill::value).collect();
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn labels_differ_from_values_for_css_and_react() {
        assert_eq!(Skill::Css.value(), "CSS");
        assert_eq!(Skill::Css.label(), "CSS3");
        assert_eq!(Skill::React.value(), "reactjs");
        assert_eq!(Skill::React.label(), "Reactjs");
        assert_eq!(Skill::Python.label(), "Python");
    }

    #[test]
    fn parse_uses_stored_value_not_label() {
        assert_eq!(Skill::parse("reactjs"), Some(Skill::React));
        assert_eq!(Skill::parse("Reactjs"), None);
        assert!(Skill::try_from("Rust").is_err());
    }
}
