//! RequestProcessor - turns a raw request payload into a response payload.

use tracing::debug;

use super::dto::{FuzzyTopsisRequest, FuzzyTopsisResponse, FuzzyTopsisResults};
use crate::application::{CalculateRankingCommand, CalculateRankingHandler};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Validates requests, runs the ranking handler, and formats responses.
#[derive(Debug, Clone, Default)]
pub struct RequestProcessor {
    handler: CalculateRankingHandler,
}

impl RequestProcessor {
    pub fn new(handler: CalculateRankingHandler) -> Self {
        Self { handler }
    }

    /// Processes a decoded request.
    ///
    /// # Errors
    /// - `ValidationFailed` for malformed input
    /// - `DegenerateCriterion` / `UndefinedCoefficient` / `NumericOverflow` from the engine
    pub fn process(&self, request: &FuzzyTopsisRequest) -> Result<FuzzyTopsisResponse, DomainError> {
        let parameters = &request.parameters;
        let problem = parameters.to_problem()?;
        debug!(
            alternatives = problem.alternative_count(),
            criteria = problem.criterion_count(),
            "Validated fuzzy TOPSIS request"
        );

        let mut command = CalculateRankingCommand::new(problem);
        if let Some(policy) = parameters.ideal_solution_policy {
            command = command.with_policy(policy);
        }

        let analysis = self.handler.handle(command)?;
        Ok(FuzzyTopsisResponse {
            results: FuzzyTopsisResults::from_analysis(
                &analysis,
                self.handler.config().display_precision,
            ),
        })
    }

    /// Decodes and processes a JSON request body.
    pub fn process_json(&self, body: &str) -> Result<FuzzyTopsisResponse, DomainError> {
        let request: FuzzyTopsisRequest = serde_json::from_str(body).map_err(|e| {
            DomainError::new(ErrorCode::InvalidRequest, format!("Invalid JSON request: {}", e))
        })?;
        self.process(&request)
    }
}
