//! CalculateRankingHandler - Command handler for Fuzzy TOPSIS evaluations.
//!
//! Runs the pipeline on a validated decision problem using the configured
//! ideal solution policy unless the command overrides it.

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::domain::foundation::DomainError;
use crate::domain::topsis::{DecisionProblem, FuzzyTopsis, IdealSolutionPolicy, TopsisAnalysis};

/// Command to rank the alternatives of one decision problem.
#[derive(Debug, Clone)]
pub struct CalculateRankingCommand {
    /// The validated input.
    pub problem: DecisionProblem,
    /// Overrides the configured ideal solution policy.
    pub policy: Option<IdealSolutionPolicy>,
}

impl CalculateRankingCommand {
    /// Creates a command that uses the configured policy.
    pub fn new(problem: DecisionProblem) -> Self {
        Self {
            problem,
            policy: None,
        }
    }

    /// Sets the ideal solution policy for this command only.
    pub fn with_policy(mut self, policy: IdealSolutionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }
}

/// Result of a successful ranking calculation.
pub type CalculateRankingResult = TopsisAnalysis;

/// Handler for ranking calculations.
///
/// Holds only configuration, so it can be shared freely between callers.
#[derive(Debug, Clone, Default)]
pub struct CalculateRankingHandler {
    config: EngineConfig,
}

impl CalculateRankingHandler {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn handle(
        &self,
        command: CalculateRankingCommand,
    ) -> Result<CalculateRankingResult, DomainError> {
        let policy = command
            .policy
            .unwrap_or(self.config.ideal_solution_policy);

        match FuzzyTopsis::new(policy).evaluate(&command.problem) {
            Ok(analysis) => {
                info!(
                    alternatives = command.problem.alternative_count(),
                    criteria = command.problem.criterion_count(),
                    policy = %policy,
                    best_alternative = analysis.best_alternative().unwrap_or_default(),
                    "Calculated fuzzy TOPSIS ranking"
                );
                Ok(analysis)
            }
            Err(err) => {
                warn!(
                    code = %err.code(),
                    policy = %policy,
                    error = %err,
                    "Fuzzy TOPSIS ranking failed"
                );
                Err(err.into())
            }
        }
    }
}
