//! Weighter - applies fuzzy criterion weights to the normalized matrix.

use super::{Criterion, FuzzyMatrix, NormalizedMatrix, WeightedMatrix};

/// Element-wise fuzzy weighting.
pub struct Weighter;

impl Weighter {
    /// Multiplies each normalized cell by its criterion's fuzzy weight:
    /// `(l * wl, m * wm, u * wu)`.
    ///
    /// Weights are used as given; no rescaling across criteria is applied.
    pub fn apply_weights(normalized: &NormalizedMatrix, criteria: &[Criterion]) -> WeightedMatrix {
        debug_assert_eq!(normalized.criterion_count(), criteria.len());

        let rows = normalized
            .rows()
            .map(|row| {
                row.iter()
                    .zip(criteria)
                    .map(|(value, criterion)| *value * criterion.weight)
                    .collect()
            })
            .collect();

        FuzzyMatrix::from_rows(rows)
    }
}
