//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object and decision problem construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite, non-negative number, got {actual}")]
    OutOfRange { field: String, actual: f64 },

    #[error("Field '{field}' is not a valid triangular fuzzy number: {reason}")]
    MalformedFuzzyNumber { field: String, reason: String },

    #[error("Field '{field}' contains duplicate identifier '{id}'")]
    DuplicateIdentifier { field: String, id: String },

    #[error("Field '{field}' is missing an entry for '{id}'")]
    MissingEntry { field: String, id: String },

    #[error("Field '{field}' has an entry for unknown identifier '{id}'")]
    UnknownEntry { field: String, id: String },

    #[error("Field '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Field '{field}' must have {expected} entries, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            actual,
        }
    }

    /// Creates a malformed fuzzy number validation error.
    pub fn malformed_fuzzy_number(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::MalformedFuzzyNumber {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate identifier validation error.
    pub fn duplicate_identifier(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::DuplicateIdentifier {
            field: field.into(),
            id: id.into(),
        }
    }

    /// Creates a missing entry validation error.
    pub fn missing_entry(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::MissingEntry {
            field: field.into(),
            id: id.into(),
        }
    }

    /// Creates an unknown entry validation error.
    pub fn unknown_entry(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::UnknownEntry {
            field: field.into(),
            id: id.into(),
        }
    }

    /// Creates an invalid value validation error, e.g. for a wrong JSON type.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a length mismatch validation error.
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Returns the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MalformedFuzzyNumber { field, .. }
            | ValidationError::DuplicateIdentifier { field, .. }
            | ValidationError::MissingEntry { field, .. }
            | ValidationError::UnknownEntry { field, .. }
            | ValidationError::InvalidValue { field, .. }
            | ValidationError::LengthMismatch { field, .. } => field,
        }
    }

    /// Relabels the field, e.g. to report `weights.C1` instead of `fuzzy_number`.
    pub fn at(mut self, new_field: impl Into<String>) -> Self {
        let new_field = new_field.into();
        match &mut self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MalformedFuzzyNumber { field, .. }
            | ValidationError::DuplicateIdentifier { field, .. }
            | ValidationError::MissingEntry { field, .. }
            | ValidationError::UnknownEntry { field, .. }
            | ValidationError::InvalidValue { field, .. }
            | ValidationError::LengthMismatch { field, .. } => *field = new_field,
        }
        self
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    ValidationFailed,
    InvalidRequest,

    // Computation errors
    DegenerateCriterion,
    UndefinedCoefficient,

    NumericOverflow,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::DegenerateCriterion => "DEGENERATE_CRITERION",
            ErrorCode::UndefinedCoefficient => "UNDEFINED_COEFFICIENT",
            ErrorCode::NumericOverflow => "NUMERIC_OVERFLOW",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.field().to_string(), err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("alternatives");
        assert_eq!(format!("{}", err), "Field 'alternatives' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("weights.C1", -0.5);
        assert_eq!(
            format!("{}", err),
            "Field 'weights.C1' must be a finite, non-negative number, got -0.5"
        );
    }

    #[test]
    fn validation_error_duplicate_identifier_displays_correctly() {
        let err = ValidationError::duplicate_identifier("criteria", "C1");
        assert_eq!(
            format!("{}", err),
            "Field 'criteria' contains duplicate identifier 'C1'"
        );
    }

    #[test]
    fn validation_error_length_mismatch_displays_correctly() {
        let err = ValidationError::length_mismatch("performance_matrix.F1", 3, 2);
        assert_eq!(
            format!("{}", err),
            "Field 'performance_matrix.F1' must have 3 entries, got 2"
        );
    }

    #[test]
    fn validation_error_invalid_value_displays_correctly() {
        let err = ValidationError::invalid_value("weights.C1", "component 0 is not a number");
        assert_eq!(
            format!("{}", err),
            "Field 'weights.C1' is invalid: component 0 is not a number"
        );
        assert_eq!(err.at("weights.C2").field(), "weights.C2");
    }

    #[test]
    fn at_relabels_field() {
        let err = ValidationError::malformed_fuzzy_number("fuzzy_number", "lower exceeds middle")
            .at("performance_matrix.F1[C2]");
        assert_eq!(err.field(), "performance_matrix.F1[C2]");
        assert!(err.to_string().contains("lower exceeds middle"));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DegenerateCriterion, "Criterion C1 is degenerate");
        assert_eq!(
            format!("{}", err),
            "[DEGENERATE_CRITERION] Criterion C1 is degenerate"
        );
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::UndefinedCoefficient, "Undefined")
            .with_detail("alternative", "F1");

        assert_eq!(err.details.get("alternative"), Some(&"F1".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_field() {
        let err: DomainError = ValidationError::missing_entry("weights", "C3").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"weights".to_string()));
        assert_eq!(err.message, "Field 'weights' is missing an entry for 'C3'");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
        assert_eq!(format!("{}", ErrorCode::UndefinedCoefficient), "UNDEFINED_COEFFICIENT");
        assert_eq!(format!("{}", ErrorCode::NumericOverflow), "NUMERIC_OVERFLOW");
    }
}
