//! Input validation for roadmap scheduling.
//!
//! Checks structural integrity of the backlog before scheduling.
//! Detects:
//! - Duplicate production IDs
//! - Duplicate episode IDs (across all productions)
//! - Inverted target shoot windows (end before start)
//!
//! The scheduler itself is total for well-formed input; these checks
//! exist for callers that assemble the backlog from external records.
//! An out-of-range producer pool size is not an error — the scheduler
//! clamps it (presentation parameter, not a correctness-critical one).

use crate::models::Production;
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
    /// Two entities share the same ID.
    DuplicateId,
    /// A production's target shoot end precedes its target shoot start.
    InvalidTargetWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a backlog of productions.
///
/// Checks:
/// 1. No duplicate production IDs
/// 2. No duplicate episode IDs (across all productions)
/// 3. Target shoot windows are not inverted
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(productions: &[Production]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut production_ids = HashSet::new();
    let mut episode_ids = HashSet::new();

    for production in productions {
        if !production_ids.insert(production.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate production ID: {}", production.id),
            ));
        }

        if let (Some(start), Some(end)) =
            (production.target_shoot_start, production.target_shoot_end)
        {
            if end < start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTargetWindow,
                    format!(
                        "Production '{}' target shoot window ends ({end}) before it starts ({start})",
                        production.id
                    ),
                ));
            }
        }

        for episode in &production.episodes {
            if !episode_ids.insert(episode.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate episode ID: {}", episode.id),
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
    use crate::models::{Episode, EpisodeType};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_backlog() -> Vec<Production> {
        vec![
            Production::new(1)
                .with_target_shoot_start(d(2025, 6, 16))
                .with_target_shoot_end(d(2025, 6, 29))
                .with_episode(Episode::new(10, EpisodeType::Cornerstone))
                .with_episode(Episode::new(11, EpisodeType::Filler)),
            Production::new(2).with_episode(Episode::new(20, EpisodeType::Cornerstone)),
        ]
    }

    #[test]
    fn test_valid_backlog() {
        assert!(validate_input(&sample_backlog()).is_ok());
    }

    #[test]
    fn test_empty_backlog_is_valid() {
        assert!(validate_input(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_production_id() {
        let productions = vec![Production::new(1), Production::new(1)];
        let errors = validate_input(&productions).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("production")));
    }

    #[test]
    fn test_duplicate_episode_id_across_productions() {
        let productions = vec![
            Production::new(1).with_episode(Episode::new(10, EpisodeType::Cornerstone)),
            Production::new(2).with_episode(Episode::new(10, EpisodeType::Filler)),
        ];
        let errors = validate_input(&productions).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("episode")));
    }

    #[test]
    fn test_inverted_target_window() {
        let productions = vec![Production::new(1)
            .with_target_shoot_start(d(2025, 6, 29))
            .with_target_shoot_end(d(2025, 6, 16))];
        let errors = validate_input(&productions).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTargetWindow));
    }

    #[test]
    fn test_half_open_window_is_valid() {
        // Only one of start/end set: nothing to compare
        let productions = vec![
            Production::new(1).with_target_shoot_start(d(2025, 6, 16)),
            Production::new(2).with_target_shoot_end(d(2025, 6, 29)),
        ];
        assert!(validate_input(&productions).is_ok());
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let productions = vec![
            Production::new(1)
                .with_target_shoot_start(d(2025, 6, 29))
                .with_target_shoot_end(d(2025, 6, 16)),
            Production::new(1),
        ];
        let errors = validate_input(&productions).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
