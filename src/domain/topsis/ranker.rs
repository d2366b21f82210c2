//! Ranker - closeness coefficients and the final ordering.

use serde::Serialize;

use super::{AlternativeDistance, DistancePair, TopsisError};

/// One alternative's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    pub alternative: String,
    /// Closeness coefficient in [0, 1], full precision.
    pub closeness: f64,
    pub distances: DistancePair,
}

/// Alternatives ordered by descending closeness coefficient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    entries: Vec<RankedAlternative>,
}

impl RankingResult {
    /// Ranked entries, best first.
    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    /// The top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Alternative identifiers, best first.
    pub fn ranking(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.alternative.as_str()).collect()
    }

    /// Closeness coefficient of a single alternative.
    pub fn closeness_of(&self, alternative: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.alternative == alternative)
            .map(|e| e.closeness)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Closeness-coefficient ranking.
pub struct Ranker;

impl Ranker {
    /// Computes `CC_i = d-_i / (d-_i + d+_i)` and sorts descending.
    ///
    /// The sort is stable, so equal coefficients keep input order.
    ///
    /// # Errors
    /// - `NonFiniteDistance` for the first alternative with an infinite or NaN distance
    /// - `UndefinedCoefficient` for the first alternative whose distances are
    ///   both zero
    ///
    /// The whole ranking is aborted rather than dropping the alternative.
    pub fn rank(distances: &[AlternativeDistance]) -> Result<RankingResult, TopsisError> {
        let mut entries = Vec::with_capacity(distances.len());
        for entry in distances {
            if !entry.distances.to_ideal.is_finite() || !entry.distances.to_negative_ideal.is_finite() {
                return Err(TopsisError::non_finite_distance(entry.alternative.clone()));
            }
            let closeness = entry
                .distances
                .closeness_coefficient()
                .ok_or_else(|| TopsisError::undefined_coefficient(entry.alternative.clone()))?;
            entries.push(RankedAlternative {
                alternative: entry.alternative.clone(),
                closeness,
                distances: entry.distances,
            });
        }

        entries.sort_by(|a, b| b.closeness.total_cmp(&a.closeness));

        Ok(RankingResult { entries })
    }
}
