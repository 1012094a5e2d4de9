//! Which conditional inputs are shown for the selected position.

use std::collections::BTreeSet;

use crate::models::{Field, Position};

/// Returns the conditional fields rendered (and validated) for `position`.
///
/// | position  | fields                                   |
/// |-----------|------------------------------------------|
/// | Developer | `relevantExperience`                     |
/// | Designer  | `relevantExperience`, `portfolioURL`     |
/// | Manager   | `managementExperience`                   |
/// | none      | nothing                                  |
pub fn visible_fields(position: Option<Position>) -> BTreeSet<Field> {
    let mut fields = BTreeSet::new();
    let Some(position) = position else {
        return fields;
    };

    if position.requires_experience() {
        fields.insert(Field::RelevantExperience);
    }
    match position {
        Position::Designer => {
            fields.insert(Field::PortfolioUrl);
        }
        Position::Manager => {
            fields.insert(Field::ManagementExperience);
        }
        Position::Developer => {}
    }
    fields
}

/// Whether `field` is on screen for `position`. Unconditional fields always are.
pub fn is_visible(
    position: Option<Position>,
    field: Field,
) -> bool {
    !field.is_conditional() || visible_fields(position).contains(&field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unselected_shows_no_conditional_fields() {
        assert!(visible_fields(None).is_empty());
    }

    #[test]
    fn developer_shows_experience_only() {
        assert_eq!(
            visible_fields(Some(Position::Developer)),
            BTreeSet::from([Field::RelevantExperience])
        );
    }

    #[test]
    fn designer_shows_experience_and_portfolio() {
        assert_eq!(
            visible_fields(Some(Position::Designer)),
            BTreeSet::from([Field::RelevantExperience, Field::PortfolioUrl])
        );
    }

    #[test]
    fn manager_shows_management_experience_only() {
        assert_eq!(
            visible_fields(Some(Position::Manager)),
            BTreeSet::from([Field::ManagementExperience])
        );
    }

    #[test]
    fn unconditional_fields_are_always_visible() {
        for position in [None, Some(Position::Manager)] {
            assert!(is_visible(position, Field::FullName));
            assert!(is_visible(position, Field::AdditionalSkills));
        }
        assert!(!is_visible(None, Field::PortfolioUrl));
        assert!(!is_visible(Some(Position::Developer), Field::PortfolioUrl));
    }
}
