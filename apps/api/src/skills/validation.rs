use std::collections::HashSet;

use thiserror::Error;

use crate::skills::models::{Requirement, Skill};

pub const MAX_LEVEL: f64 = 5.0;

/// Malformed comparator input. Raised before any computation; levels are
/// never clamped or coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("skill name cannot be empty")]
    EmptyName,

    #[error("duplicate skill name '{0}'")]
    DuplicateName(String),

    #[error("level for '{name}' is not a finite number")]
    NonFiniteLevel { name: String },

    #[error("level {level} for '{name}' is negative")]
    NegativeLevel { name: String, level: f64 },

    #[error("level {level} for '{name}' exceeds the maximum level of 5")]
    LevelTooHigh { name: String, level: f64 },
}

/// Checks a single level against the closed range `[0, 5]`.
pub fn validate_level(name: &str, level: f64) -> Result<(), ValidationError> {
    if !level.is_finite() {
        return Err(ValidationError::NonFiniteLevel {
            name: name.to_string(),
        });
    }
    if level < 0.0 {
        return Err(ValidationError::NegativeLevel {
            name: name.to_string(),
            level,
        });
    }
    if level > MAX_LEVEL {
        return Err(ValidationError::LevelTooHigh {
            name: name.to_string(),
            level,
        });
    }
    Ok(())
}

pub fn validate_skills(skills: &[Skill]) -> Result<(), ValidationError> {
    validate_named_levels(skills.iter().map(|s| (s.name.as_str(), s.level)))
}

pub fn validate_requirements(requirements: &[Requirement]) -> Result<(), ValidationError> {
    validate_named_levels(
        requirements
            .iter()
            .map(|r| (r.name.as_str(), r.minimum_level)),
    )
}

fn validate_named_levels<'a>(
    items: impl Iterator<Item = (&'a str, f64)>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (name, level) in items {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateName(name.to_string()));
        }
        validate_level(name, level)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::models::Importance;

    #[test]
    fn test_accepts_boundaries_and_fractions() {
        let skills = vec![
            Skill::new("Zero", 0.0),
            Skill::new("Max", 5.0),
            Skill::new("Average", 4.2),
        ];
        assert!(validate_skills(&skills).is_ok());
    }

    #[test]
    fn test_rejects_negative_level() {
        let err = validate_skills(&[Skill::new("SQL", -1.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeLevel { .. }));
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        assert_eq!(
            validate_skills(&[Skill::new("SQL", f64::NAN)]).unwrap_err(),
            ValidationError::NonFiniteLevel {
                name: "SQL".to_string()
            }
        );
        assert!(validate_level("SQL", f64::INFINITY).is_err());
        assert!(validate_level("SQL", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_rejects_level_above_five() {
        let err = validate_level("SQL", 5.5).unwrap_err();
        assert!(matches!(err, ValidationError::LevelTooHigh { .. }));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let skills = vec![Skill::new("SQL", 3.0), Skill::new("SQL", 4.0)];
        assert_eq!(
            validate_skills(&skills).unwrap_err(),
            ValidationError::DuplicateName("SQL".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive_for_uniqueness() {
        let skills = vec![Skill::new("SQL", 3.0), Skill::new("sql", 4.0)];
        assert!(validate_skills(&skills).is_ok());
    }

    #[test]
    fn test_rejects_blank_requirement_name() {
        let reqs = vec![Requirement::new("  ", 3.0, Importance::Required)];
        assert_eq!(
            validate_requirements(&reqs).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn test_requirement_minimum_level_is_range_checked() {
        let reqs = vec![Requirement::new("Excel", -2.0, Importance::Preferred)];
        assert!(validate_requirements(&reqs).is_err());
    }

    #[test]
    fn test_error_message_names_the_skill() {
        let err = validate_level("Python", -0.5).unwrap_err();
        assert!(err.to_string().contains("Python"));
    }
}
