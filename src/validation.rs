//! Input validation for simulation runs.
//!
//! Checks a process set and its configuration before any policy runs.
//! Detects:
//! - Duplicate or empty process names
//! - Zero burst times
//! - A zero quantum
//! - Overlapping three-level band thresholds
//!
//! The tick engine assumes all of these hold; it never re-checks them.

use std::collections::HashSet;
use std::fmt;

use crate::config::SimulationConfig;
use crate::models::Process;

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
    /// A process definition could not be parsed.
    InvalidProcessDefinition,
    /// Two processes share the same name.
    DuplicateName,
    /// A process has an empty name.
    EmptyName,
    /// A process requires no CPU time.
    ZeroBurst,
    /// The time quantum is zero.
    InvalidQuantum,
    /// Band thresholds leave no room for the middle band ordering.
    InvalidBands,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. No empty process names
/// 2. No duplicate process names
/// 3. Every burst time is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (i, p) in processes.iter().enumerate() {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process #{} has an empty name", i + 1),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a burst time of 0", p.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the simulation configuration.
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.quantum == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Quantum must be a positive number of ticks",
        ));
    }

    if config.bands.high_max >= config.bands.low_min {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBands,
            format!(
                "Band thresholds overlap: high_max {} must be below low_min {}",
                config.bands.high_max, config.bands.low_min
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates processes and configuration together, reporting every issue.
pub fn validate_input(processes: &[Process], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(e) = validate_processes(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_config(config) {
        errors.extend(e);
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
    use crate::config::BandThresholds;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), &SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_process_set_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P1", 2, 1)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("P1")));
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_processes(&[Process::new("  ", 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyName);
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[Process::new("P1", 0, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
    }

    #[test]
    fn test_zero_quantum() {
        let errors = validate_config(&SimulationConfig::new().with_quantum(0)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_overlapping_bands() {
        let config = SimulationConfig::new().with_bands(BandThresholds::new(4, 4));
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBands);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P1", 0, 2)];
        let config = SimulationConfig::new().with_quantum(0);

        let errors = validate_input(&processes, &config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::new(ValidationErrorKind::ZeroBurst, "bad");
        assert_eq!(e.to_string(), "ZeroBurst: bad");
    }
}
