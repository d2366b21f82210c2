//! Fuzzy TOPSIS pipeline errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while building or evaluating a decision problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Criterion '{criterion}' cannot be normalized: {reason}")]
    DegenerateCriterion { criterion: String, reason: String },

    #[error("Closeness coefficient of alternative '{alternative}' is undefined: it coincides with both ideal solutions")]
    UndefinedCoefficient { alternative: String },

    #[error("Distances of alternative '{alternative}' are not finite; input magnitudes are too large")]
    NonFiniteDistance { alternative: String },
}

impl TopsisError {
    /// Creates a degenerate criterion error.
    pub fn degenerate_criterion(criterion: impl Into<String>, reason: impl Into<String>) -> Self {
        TopsisError::DegenerateCriterion {
            criterion: criterion.into(),
            reason: reason.into(),
        }
    }

    /// Creates an undefined coefficient error.
    pub fn undefined_coefficient(alternative: impl Into<String>) -> Self {
        TopsisError::UndefinedCoefficient {
            alternative: alternative.into(),
        }
    }

    /// Creates a non-finite distance error.
    pub fn non_finite_distance(alternative: impl Into<String>) -> Self {
        TopsisError::NonFiniteDistance {
            alternative: alternative.into(),
        }
    }

    /// Returns the error code callers see for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::Validation(_) => ErrorCode::ValidationFailed,
            TopsisError::DegenerateCriterion { .. } => ErrorCode::DegenerateCriterion,
            TopsisError::UndefinedCoefficient { .. } => ErrorCode::UndefinedCoefficient,
            TopsisError::NonFiniteDistance { .. } => ErrorCode::NumericOverflow,
        }
    }
}

impl From<TopsisError> for DomainError {
    fn from(err: TopsisError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            TopsisError::Validation(inner) => inner.into(),
            TopsisError::DegenerateCriterion { criterion, .. } => {
                DomainError::new(code, message).with_detail("criterion", criterion)
            }
            TopsisError::UndefinedCoefficient { alternative }
            | TopsisError::NonFiniteDistance { alternative } => {
                DomainError::new(code, message).with_detail("alternative", alternative)
            }
        }
    }
}
