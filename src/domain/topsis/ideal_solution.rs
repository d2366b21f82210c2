//! Ideal Solution Resolver - derives FPIS and FNIS from the weighted matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeightedMatrix;
use crate::domain::foundation::TriangularFuzzyNumber;

/// How the fuzzy positive and negative ideal solutions are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealSolutionPolicy {
    /// FPIS = crisp max upper bound per criterion, FNIS = crisp min lower bound.
    #[default]
    DataDerived,
    /// FPIS = (1, 1, 1) and FNIS = (0, 0, 0) for every criterion.
    ///
    /// Only meaningful when weighted values already lie in [0, 1].
    FixedUnitInterval,
}

impl IdealSolutionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdealSolutionPolicy::DataDerived => "data_derived",
            IdealSolutionPolicy::FixedUnitInterval => "fixed_unit_interval",
        }
    }
}

impl fmt::Display for IdealSolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reference fuzzy number per criterion for the best and worst attainable values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealSolution {
    /// Fuzzy positive ideal solution (FPIS).
    pub positive: Vec<TriangularFuzzyNumber>,
    /// Fuzzy negative ideal solution (FNIS).
    pub negative: Vec<TriangularFuzzyNumber>,
}

/// Resolves ideal solutions under a chosen policy.
pub struct IdealSolutionResolver;

impl IdealSolutionResolver {
    /// Computes FPIS and FNIS for every criterion column.
    ///
    /// # Edge Cases
    /// - Single alternative with `DataDerived`: FPIS and FNIS collapse onto
    ///   that alternative's own upper and lower bounds
    pub fn resolve(policy: IdealSolutionPolicy, weighted: &WeightedMatrix) -> IdealSolution {
        let criterion_count = weighted.criterion_count();

        match policy {
            IdealSolutionPolicy::DataDerived => {
                let mut positive = Vec::with_capacity(criterion_count);
                let mut negative = Vec::with_capacity(criterion_count);
                for index in 0..criterion_count {
                    let max_upper = weighted
                        .column(index)
                        .map(|v| v.upper())
                        .fold(f64::NEG_INFINITY, f64::max);
                    let min_lower = weighted
                        .column(index)
                        .map(|v| v.lower())
                        .fold(f64::INFINITY, f64::min);
                    positive.push(TriangularFuzzyNumber::from_components(
                        max_upper, max_upper, max_upper,
                    ));
                    negative.push(TriangularFuzzyNumber::from_components(
                        min_lower, min_lower, min_lower,
                    ));
                }
                IdealSolution { positive, negative }
            }
            IdealSolutionPolicy::FixedUnitInterval => IdealSolution {
                positive: vec![TriangularFuzzyNumber::ONE; criterion_count],
                negative: vec![TriangularFuzzyNumber::ZERO; criterion_count],
            },
        }
    }
}
