//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (fuzzy numbers, criterion types, errors)
//! - `topsis` - Pure Fuzzy TOPSIS engine (normalize, weight, ideal solutions, distances, rank)

pub mod foundation;
pub mod topsis;
