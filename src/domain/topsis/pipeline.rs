//! Fuzzy TOPSIS pipeline - runs every stage in order on one decision problem.

use serde::Serialize;
use tracing::debug;

use super::{
    AlternativeDistance, DecisionProblem, DistanceCalculator, IdealSolution,
    IdealSolutionPolicy, IdealSolutionResolver, NormalizedMatrix, Normalizer, Ranker,
    RankingResult, TopsisError, WeightedMatrix, Weighter,
};

/// Every intermediate stage of one evaluation, at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisAnalysis {
    pub policy: IdealSolutionPolicy,
    pub normalized: NormalizedMatrix,
    pub weighted: WeightedMatrix,
    pub ideal_solution: IdealSolution,
    /// Distances in input alternative order.
    pub distances: Vec<AlternativeDistance>,
    pub ranking: RankingResult,
}

impl TopsisAnalysis {
    /// Identifier of the top-ranked alternative.
    pub fn best_alternative(&self) -> Option<&str> {
        self.ranking.best().map(|b| b.alternative.as_str())
    }
}

/// Fuzzy TOPSIS evaluator.
///
/// Holds no state besides the ideal-solution policy, so one instance can
/// evaluate any number of problems, including from several threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyTopsis {
    policy: IdealSolutionPolicy,
}

impl FuzzyTopsis {
    pub fn new(policy: IdealSolutionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IdealSolutionPolicy {
        self.policy
    }

    /// Normalize, weight, resolve ideals, measure distances, rank.
    ///
    /// # Errors
    /// - `DegenerateCriterion` from normalization
    /// - `UndefinedCoefficient` from ranking
    pub fn evaluate(&self, problem: &DecisionProblem) -> Result<TopsisAnalysis, TopsisError> {
        debug!(
            alternatives = problem.alternative_count(),
            criteria = problem.criterion_count(),
            policy = %self.policy,
            "Evaluating fuzzy TOPSIS problem"
        );

        let normalized = Normalizer::normalize(problem.performance(), problem.criteria())?;
        let weighted = Weighter::apply_weights(&normalized, problem.criteria());
        let ideal_solution = IdealSolutionResolver::resolve(self.policy, &weighted);
        let distances =
            DistanceCalculator::distances(problem.alternatives(), &weighted, &ideal_solution);
        let ranking = Ranker::rank(&distances)?;

        if let Some(best) = ranking.best() {
            debug!(
                best_alternative = %best.alternative,
                closeness = best.closeness,
                "Ranked alternatives"
            );
        }

        Ok(TopsisAnalysis {
            policy: self.policy,
            normalized,
            weighted,
            ideal_solution,
            distances,
            ranking,
        })
    }
}
