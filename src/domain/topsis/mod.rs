//! Topsis Module - Pure domain services for Fuzzy TOPSIS ranking.
//!
//! Stages run strictly in order, each consuming the previous stage's output:
//!
//! 1. `DecisionProblem` - validated alternatives, criteria, performance matrix
//! 2. `Normalizer` - rescales each criterion column onto [0, 1]
//! 3. `Weighter` - multiplies by fuzzy criterion weights
//! 4. `IdealSolutionResolver` - FPIS / FNIS under an `IdealSolutionPolicy`
//! 5. `DistanceCalculator` - vertex distances to FPIS and FNIS
//! 6. `Ranker` - closeness coefficients and ordering
//!
//! `FuzzyTopsis` runs the whole pipeline. Every function is pure: stages
//! allocate fresh structures and never mutate their input, so evaluations
//! can run in parallel without coordination.

mod decision_matrix;
mod distance;
mod errors;
mod ideal_solution;
mod normalizer;
mod pipeline;
mod ranker;
mod weighter;

pub(crate) use decision_matrix::validate_identifiers;
pub use decision_matrix::{
    Criterion, DecisionProblem, DecisionProblemBuilder, FuzzyMatrix, NormalizedMatrix,
    WeightedMatrix,
};
pub use distance::{AlternativeDistance, DistanceCalculator, DistancePair};
pub use errors::TopsisError;
pub use ideal_solution::{IdealSolution, IdealSolutionPolicy, IdealSolutionResolver};
pub use normalizer::Normalizer;
pub use pipeline::{FuzzyTopsis, TopsisAnalysis};
pub use ranker::{RankedAlternative, Ranker, RankingResult};
pub use weighter::Weighter;
