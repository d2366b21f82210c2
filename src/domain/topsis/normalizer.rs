//! Normalizer - rescales each criterion column onto [0, 1].

use tracing::debug;

use super::{Criterion, FuzzyMatrix, NormalizedMatrix, TopsisError};
use crate::domain::foundation::{CriterionType, TriangularFuzzyNumber};

/// Fuzzy matrix normalization using the benefit/cost convention.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes every criterion column of the performance matrix.
    ///
    /// # Algorithm
    /// - Benefit: `c_max = max(u)` over the column, output `(l/c_max, m/c_max, u/c_max)`
    /// - Cost: `c_min = min(l)` over the column, output `(c_min/u, c_min/m, c_min/l)`
    ///
    /// # Errors
    /// `DegenerateCriterion` when a benefit column has only zero upper bounds,
    /// or a cost column contains a zero component.
    pub fn normalize(
        matrix: &FuzzyMatrix,
        criteria: &[Criterion],
    ) -> Result<NormalizedMatrix, TopsisError> {
        debug_assert_eq!(matrix.criterion_count(), criteria.len());

        let mut columns = Vec::with_capacity(criteria.len());
        for (index, criterion) in criteria.iter().enumerate() {
            let column = match criterion.kind {
                CriterionType::Benefit => Self::normalize_benefit(matrix, index, &criterion.id)?,
                CriterionType::Cost => Self::normalize_cost(matrix, index, &criterion.id)?,
            };
            columns.push(column);
        }

        Ok(transpose(columns, matrix.alternative_count()))
    }

    fn normalize_benefit(
        matrix: &FuzzyMatrix,
        index: usize,
        criterion_id: &str,
    ) -> Result<Vec<TriangularFuzzyNumber>, TopsisError> {
        let c_max = matrix.column(index).map(|v| v.upper()).fold(0.0, f64::max);
        if c_max <= 0.0 {
            return Err(TopsisError::degenerate_criterion(
                criterion_id,
                "every upper bound is zero",
            ));
        }

        debug!(criterion = criterion_id, c_max, "Normalizing benefit criterion");

        Ok(matrix
            .column(index)
            .map(|v| {
                TriangularFuzzyNumber::from_components(
                    v.lower() / c_max,
                    v.middle() / c_max,
                    v.upper() / c_max,
                )
            })
            .collect())
    }

    fn normalize_cost(
        matrix: &FuzzyMatrix,
        index: usize,
        criterion_id: &str,
    ) -> Result<Vec<TriangularFuzzyNumber>, TopsisError> {
        // Lower bounds are the smallest components, so a zero anywhere shows up here.
        if matrix.column(index).any(|v| v.lower() <= 0.0) {
            return Err(TopsisError::degenerate_criterion(
                criterion_id,
                "cost criteria require strictly positive values",
            ));
        }

        let c_min = matrix
            .column(index)
            .map(|v| v.lower())
            .fold(f64::INFINITY, f64::min);

        debug!(criterion = criterion_id, c_min, "Normalizing cost criterion");

        Ok(matrix
            .column(index)
            .map(|v| {
                TriangularFuzzyNumber::from_components(
                    c_min / v.upper(),
                    c_min / v.middle(),
                    c_min / v.lower(),
                )
            })
            .collect())
    }
}

/// Turns per-criterion columns back into per-alternative rows.
fn transpose(columns: Vec<Vec<TriangularFuzzyNumber>>, alternative_count: usize) -> FuzzyMatrix {
    let rows = (0..alternative_count)
        .map(|i| columns.iter().map(|column| column[i]).collect())
        .collect();
    FuzzyMatrix::from_rows(rows)
}
