//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types
//! that form the vocabulary of the Fuzzy TOPSIS domain.

mod criterion_type;
mod errors;
mod fuzzy_number;

pub use criterion_type::CriterionType;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fuzzy_number::TriangularFuzzyNumber;
