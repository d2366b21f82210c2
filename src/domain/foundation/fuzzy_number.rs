//! Triangular fuzzy number value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use super::ValidationError;

/// An uncertain quantity described by lower, most-likely, and upper bounds.
///
/// Always satisfies `0 <= lower <= middle <= upper` with finite components.
/// Serializes as a `[l, m, u]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct TriangularFuzzyNumber {
    lower: f64,
    middle: f64,
    upper: f64,
}

impl TriangularFuzzyNumber {
    /// The (0, 0, 0) fuzzy number.
    pub const ZERO: Self = Self {
        lower: 0.0,
        middle: 0.0,
        upper: 0.0,
    };

    /// The (1, 1, 1) fuzzy number.
    pub const ONE: Self = Self {
        lower: 1.0,
        middle: 1.0,
        upper: 1.0,
    };

    /// Creates a fuzzy number, returning error if a component is negative,
    /// non-finite, or out of order.
    pub fn try_new(lower: f64, middle: f64, upper: f64) -> Result<Self, ValidationError> {
        for value in [lower, middle, upper] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range("fuzzy_number", value));
            }
        }
        if lower > middle {
            return Err(ValidationError::malformed_fuzzy_number(
                "fuzzy_number",
                format!("lower bound {} exceeds most-likely value {}", lower, middle),
            ));
        }
        if middle > upper {
            return Err(ValidationError::malformed_fuzzy_number(
                "fuzzy_number",
                format!("most-likely value {} exceeds upper bound {}", middle, upper),
            ));
        }
        Ok(Self {
            lower,
            middle,
            upper,
        })
    }

    /// Creates a crisp fuzzy number (v, v, v).
    pub fn crisp(value: f64) -> Result<Self, ValidationError> {
        Self::try_new(value, value, value)
    }

    /// Builds a value computed by the pipeline from already-valid inputs.
    pub(crate) fn from_components(lower: f64, middle: f64, upper: f64) -> Self {
        debug_assert!(lower <= middle && middle <= upper);
        Self {
            lower,
            middle,
            upper,
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn middle(&self) -> f64 {
        self.middle
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if all three components are equal.
    pub fn is_crisp(&self) -> bool {
        self.lower == self.middle && self.middle == self.upper
    }

    /// Returns the components as `[l, m, u]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.lower, self.middle, self.upper]
    }

    /// Vertex distance: `sqrt(((l1-l2)^2 + (m1-m2)^2 + (u1-u2)^2) / 3)`.
    ///
    /// Differences are scaled by the largest one before squaring, so any
    /// two finite fuzzy numbers have a finite distance.
    pub fn vertex_distance(&self, other: &Self) -> f64 {
        let diffs = [
            self.lower - other.lower,
            self.middle - other.middle,
            self.upper - other.upper,
        ];
        let scale = diffs.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }

        let sum_of_squares: f64 = diffs.iter().map(|d| (d / scale).powi(2)).sum();
        scale * (sum_of_squares / 3.0).sqrt()
    }
}

impl Mul for TriangularFuzzyNumber {
    type Output = Self;

    /// Component-wise fuzzy product.
    fn mul(self, rhs: Self) -> Self {
        Self {
            lower: self.lower * rhs.lower,
            middle: self.middle * rhs.middle,
            upper: self.upper * rhs.upper,
        }
    }
}

impl TryFrom<[f64; 3]> for TriangularFuzzyNumber {
    type Error = ValidationError;

    fn try_from(value: [f64; 3]) -> Result<Self, Self::Error> {
        Self::try_new(value[0], value[1], value[2])
    }
}

impl From<TriangularFuzzyNumber> for [f64; 3] {
    fn from(value: TriangularFuzzyNumber) -> Self {
        value.to_array()
    }
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.lower, self.middle, self.upper)
    }
}
