//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod calculate_ranking;

pub use calculate_ranking::{
    CalculateRankingCommand, CalculateRankingHandler, CalculateRankingResult,
};
