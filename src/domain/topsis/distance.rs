//! Distance Calculator - per-alternative distances to FPIS and FNIS.

use serde::Serialize;

use super::{IdealSolution, WeightedMatrix};

/// Distances of one alternative to the positive and negative ideal solutions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistancePair {
    /// d+ : summed vertex distance to FPIS.
    pub to_ideal: f64,
    /// d- : summed vertex distance to FNIS.
    pub to_negative_ideal: f64,
}

impl DistancePair {
    /// `d- / (d+ + d-)`, or None when both distances are zero.
    pub fn closeness_coefficient(&self) -> Option<f64> {
        let total = self.to_ideal + self.to_negative_ideal;
        if total > 0.0 {
            Some(self.to_negative_ideal / total)
        } else {
            None
        }
    }
}

/// Distance pair tagged with its alternative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeDistance {
    pub alternative: String,
    pub distances: DistancePair,
}

/// Vertex-method distance computation.
pub struct DistanceCalculator;

impl DistanceCalculator {
    /// Computes (d+, d-) for each alternative, in input order.
    ///
    /// # Algorithm
    /// `d+_i = Σ_j sqrt(((l_ij - l*_j)^2 + (m_ij - m*_j)^2 + (u_ij - u*_j)^2) / 3)`
    /// and likewise `d-_i` against FNIS. Per-criterion distances are summed,
    /// not combined into one Euclidean norm.
    pub fn distances(
        alternatives: &[String],
        weighted: &WeightedMatrix,
        ideal: &IdealSolution,
    ) -> Vec<AlternativeDistance> {
        debug_assert_eq!(alternatives.len(), weighted.alternative_count());

        alternatives
            .iter()
            .zip(weighted.rows())
            .map(|(alternative, row)| {
                let to_ideal: f64 = row
                    .iter()
                    .zip(&ideal.positive)
                    .map(|(value, fpis)| value.vertex_distance(fpis))
                    .sum();
                let to_negative_ideal: f64 = row
                    .iter()
                    .zip(&ideal.negative)
                    .map(|(value, fnis)| value.vertex_distance(fnis))
                    .sum();

                AlternativeDistance {
                    alternative: alternative.clone(),
                    distances: DistancePair {
                        to_ideal,
                        to_negative_ideal,
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TriangularFuzzyNumber;
    use crate::domain::topsis::FuzzyMatrix;

    fn tfn(l: f64, m: f64, u: f64) -> TriangularFuzzyNumber {
        TriangularFuzzyNumber::try_new(l, m, u).unwrap()
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_criterion_matches_vertex_formula() {
        let weighted = FuzzyMatrix::new(vec![
            vec![tfn(0.225, 0.35, 0.5)],
            vec![tfn(0.1875, 0.3, 0.4375)],
        ])
        .unwrap();
        let ideal = IdealSolution {
            positive: vec![tfn(0.5, 0.5, 0.5)],
            negative: vec![tfn(0.1875, 0.1875, 0.1875)],
        };

        let result = DistanceCalculator::distances(&ids(&["F1", "F2"]), &weighted, &ideal);

        let f1 = result[0].distances;
        let expected_plus = ((0.275f64.powi(2) + 0.15f64.powi(2)) / 3.0).sqrt();
        let expected_minus =
            ((0.0375f64.powi(2) + 0.1625f64.powi(2) + 0.3125f64.powi(2)) / 3.0).sqrt();
        assert_eq!(result[0].alternative, "F1");
        assert!((f1.to_ideal - expected_plus).abs() < 1e-12);
        assert!((f1.to_negative_ideal - expected_minus).abs() < 1e-12);

        let f2 = result[1].distances;
        assert_eq!(result[1].alternative, "F2");
        assert!(f2.to_ideal > f1.to_ideal);
        assert!(f2.to_negative_ideal < f1.to_negative_ideal);
    }

    #[test]
    fn per_criterion_distances_are_summed() {
        let weighted = FuzzyMatrix::new(vec![vec![
            TriangularFuzzyNumber::ZERO,
            TriangularFuzzyNumber::ZERO,
        ]])
        .unwrap();
        let ideal = IdealSolution {
            positive: vec![TriangularFuzzyNumber::ONE; 2],
            negative: vec![TriangularFuzzyNumber::ZERO; 2],
        };

        let result = DistanceCalculator::distances(&ids(&["A"]), &weighted, &ideal);

        // Two criteria each at distance 1 sum to 2, not sqrt(2).
        assert!((result[0].distances.to_ideal - 2.0).abs() < 1e-12);
        assert_eq!(result[0].distances.to_negative_ideal, 0.0);
    }

    #[test]
    fn closeness_coefficient_is_ratio_to_total() {
        let pair = DistancePair {
            to_ideal: 0.25,
            to_negative_ideal: 0.75,
        };
        assert_eq!(pair.closeness_coefficient(), Some(0.75));
    }

    #[test]
    fn closeness_coefficient_undefined_at_zero_total() {
        let pair = DistancePair {
            to_ideal: 0.0,
            to_negative_ideal: 0.0,
        };
        assert_eq!(pair.closeness_coefficient(), None);
    }
}
