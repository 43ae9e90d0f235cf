//! Input validation for project networks.
//!
//! Checks structural integrity of activity definitions before a network
//! is built. Detects:
//! - Duplicate activity IDs
//! - Predecessor references to activities that don't exist
//! - Negative (or NaN) durations
//!
//! Cycle detection is deliberately NOT a construction check: a cyclic
//! input is structurally well-formed and only fails once scheduling
//! attempts a topological order (see [`crate::scheduler`]).

use crate::models::Activity;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two activities share the same ID.
    DuplicateId,
    /// An activity references a predecessor that doesn't exist.
    UnknownPredecessor,
    /// An activity has a negative or non-finite duration.
    NegativeDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a set of activity definitions.
///
/// Checks:
/// 1. No duplicate activity IDs
/// 2. All predecessor references point to existing activities
/// 3. All durations are finite and non-negative
///
/// All detected issues are collected; the caller gets the full list,
/// not just the first failure.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_activities(activities: &[Activity]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for act in activities {
        if !ids.insert(act.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity ID: {}", act.id),
            ));
        }

        if !(act.duration.is_finite() && act.duration >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!(
                    "Activity '{}' has invalid duration {} (must be finite and >= 0)",
                    act.id, act.duration
                ),
            ));
        }
    }

    for act in activities {
        for pred in &act.predecessors {
            if !ids.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPredecessor,
                    format!(
                        "Activity '{}' references unknown predecessor '{}'",
                        act.id, pred
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_activities() -> Vec<Activity> {
        vec![
            Activity::new("A", 7.0),
            Activity::new("B", 3.0).with_predecessor("A"),
            Activity::new("C", 6.0),
            Activity::new("D", 3.0).with_predecessor("C"),
            Activity::new("E", 2.0).with_predecessors(["B", "D"]),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_activities(&sample_activities()).is_ok());
    }

    #[test]
    fn test_duplicate_activity_id() {
        let activities = vec![Activity::new("A", 1.0), Activity::new("A", 2.0)];

        let errors = validate_activities(&activities).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_unknown_predecessor() {
        let activities = vec![Activity::new("A", 1.0).with_predecessor("NONEXISTENT")];

        let errors = validate_activities(&activities).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPredecessor
                && e.message.contains("NONEXISTENT")));
    }

    #[test]
    fn test_negative_duration() {
        let activities = vec![Activity::new("A", -1.0)];

        let errors = validate_activities(&activities).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration));
    }

    #[test]
    fn test_nan_duration() {
        let activities = vec![Activity::new("A", f64::NAN)];

        let errors = validate_activities(&activities).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration));
    }

    #[test]
    fn test_zero_duration_is_valid() {
        // Milestones are modeled as zero-duration activities.
        let activities = vec![Activity::new("M", 0.0)];
        assert!(validate_activities(&activities).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let activities = vec![
            Activity::new("A", -1.0),
            Activity::new("A", 1.0),
            Activity::new("B", 1.0).with_predecessor("MISSING"),
        ];

        let errors = validate_activities(&activities).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_cycle_is_not_a_validation_error() {
        // A → B → A is structurally well-formed; only scheduling rejects it.
        let activities = vec![
            Activity::new("A", 1.0).with_predecessor("B"),
            Activity::new("B", 1.0).with_predecessor("A"),
        ];
        assert!(validate_activities(&activities).is_ok());
    }
}
