//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations between the payload adapters
//! and the pure Fuzzy TOPSIS engine.

pub mod handlers;

pub use handlers::{CalculateRankingCommand, CalculateRankingHandler, CalculateRankingResult};
