//! Decision problem - alternatives, criteria, and the fuzzy performance matrix.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::{CriterionType, TriangularFuzzyNumber, ValidationError};

/// A criterion with its directionality and fuzzy weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: String,
    pub kind: CriterionType,
    pub weight: TriangularFuzzyNumber,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(id: impl Into<String>, kind: CriterionType, weight: TriangularFuzzyNumber) -> Self {
        Self {
            id: id.into(),
            kind,
            weight,
        }
    }
}

/// Dense matrix of fuzzy numbers: one row per alternative, one column per criterion.
///
/// Rows and columns follow the order of the owning problem's alternatives and criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FuzzyMatrix {
    rows: Vec<Vec<TriangularFuzzyNumber>>,
}

/// Performance matrix after normalization.
pub type NormalizedMatrix = FuzzyMatrix;

/// Normalized matrix after applying criterion weights.
pub type WeightedMatrix = FuzzyMatrix;

impl FuzzyMatrix {
    /// Creates a matrix, returning error if rows differ in length.
    pub fn new(rows: Vec<Vec<TriangularFuzzyNumber>>) -> Result<Self, ValidationError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (index, row) in rows.iter().enumerate() {
                if row.len() != expected {
                    return Err(ValidationError::length_mismatch(
                        format!("rows[{}]", index),
                        expected,
                        row.len(),
                    ));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Wraps rows derived from an already rectangular matrix.
    pub(crate) fn from_rows(rows: Vec<Vec<TriangularFuzzyNumber>>) -> Self {
        Self { rows }
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Returns a single cell.
    pub fn get(&self, alternative_index: usize, criterion_index: usize) -> Option<&TriangularFuzzyNumber> {
        self.rows.get(alternative_index)?.get(criterion_index)
    }

    /// Iterates over all rows in alternative order.
    pub fn rows(&self) -> impl Iterator<Item = &[TriangularFuzzyNumber]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over one criterion's values in alternative order.
    pub fn column(&self, criterion_index: usize) -> impl Iterator<Item = &TriangularFuzzyNumber> {
        self.rows.iter().filter_map(move |row| row.get(criterion_index))
    }
}

/// A validated Fuzzy TOPSIS input: ordered alternatives, ordered criteria,
/// and a complete performance matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionProblem {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    performance: FuzzyMatrix,
}

impl DecisionProblem {
    /// Creates a decision problem from an already ordered matrix.
    ///
    /// # Errors
    /// - No alternatives or no criteria
    /// - Empty or duplicate identifiers
    /// - Matrix shape differs from the alternatives x criteria shape
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        performance: FuzzyMatrix,
    ) -> Result<Self, ValidationError> {
        validate_identifiers("alternatives", alternatives.iter().map(String::as_str))?;
        validate_identifiers("criteria", criteria.iter().map(|c| c.id.as_str()))?;

        if performance.alternative_count() != alternatives.len() {
            return Err(ValidationError::length_mismatch(
                "performance_matrix",
                alternatives.len(),
                performance.alternative_count(),
            ));
        }
        if performance.criterion_count() != criteria.len() {
            return Err(ValidationError::length_mismatch(
                "performance_matrix.row",
                criteria.len(),
                performance.criterion_count(),
            ));
        }

        Ok(Self {
            alternatives,
            criteria,
            performance,
        })
    }

    /// Creates a builder for constructing a decision problem cell by cell.
    pub fn builder() -> DecisionProblemBuilder {
        DecisionProblemBuilder::new()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn performance(&self) -> &FuzzyMatrix {
        &self.performance
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

/// Checks that an identifier list is non-empty, has no blank entries, and no duplicates.
pub(crate) fn validate_identifiers<'a>(
    field: &str,
    ids: impl ExactSizeIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    if ids.len() == 0 {
        return Err(ValidationError::empty_field(field));
    }

    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}[{}]", field, index)));
        }
        if !seen.insert(id) {
            return Err(ValidationError::duplicate_identifier(field, id));
        }
    }
    Ok(())
}

/// Builder for constructing DecisionProblem instances.
#[derive(Debug, Default)]
pub struct DecisionProblemBuilder {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    cells: BTreeMap<(String, String), TriangularFuzzyNumber>,
}

impl DecisionProblemBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternatives, in ranking tie-break order.
    pub fn alternatives(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.alternatives = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends one alternative.
    pub fn alternative(mut self, id: impl Into<String>) -> Self {
        self.alternatives.push(id.into());
        self
    }

    /// Appends one criterion.
    pub fn criterion(
        mut self,
        id: impl Into<String>,
        kind: CriterionType,
        weight: TriangularFuzzyNumber,
    ) -> Self {
        self.criteria.push(Criterion::new(id, kind, weight));
        self
    }

    /// Sets a performance cell.
    pub fn cell(
        mut self,
        alternative_id: impl Into<String>,
        criterion_id: impl Into<String>,
        value: TriangularFuzzyNumber,
    ) -> Self {
        self.cells
            .insert((alternative_id.into(), criterion_id.into()), value);
        self
    }

    /// Builds the decision problem.
    ///
    /// # Errors
    /// Everything [`DecisionProblem::new`] rejects, plus missing cells and
    /// cells that name an unknown alternative or criterion.
    pub fn build(mut self) -> Result<DecisionProblem, ValidationError> {
        validate_identifiers("alternatives", self.alternatives.iter().map(String::as_str))?;
        validate_identifiers("criteria", self.criteria.iter().map(|c| c.id.as_str()))?;

        let known_alternatives: HashSet<&str> =
            self.alternatives.iter().map(String::as_str).collect();
        let known_criteria: HashSet<&str> = self.criteria.iter().map(|c| c.id.as_str()).collect();
        for (alternative_id, criterion_id) in self.cells.keys() {
            if !known_alternatives.contains(alternative_id.as_str()) {
                return Err(ValidationError::unknown_entry(
                    "performance_matrix",
                    alternative_id.clone(),
                ));
            }
            if !known_criteria.contains(criterion_id.as_str()) {
                return Err(ValidationError::unknown_entry(
                    format!("performance_matrix.{}", alternative_id),
                    criterion_id.clone(),
                ));
            }
        }

        let mut rows = Vec::with_capacity(self.alternatives.len());
        for alternative_id in &self.alternatives {
            let mut row = Vec::with_capacity(self.criteria.len());
            for criterion in &self.criteria {
                let key = (alternative_id.clone(), criterion.id.clone());
                let value = self.cells.remove(&key).ok_or_else(|| {
                    ValidationError::missing_entry(
                        format!("performance_matrix.{}", alternative_id),
                        criterion.id.clone(),
                    )
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        DecisionProblem::new(self.alternatives, self.criteria, FuzzyMatrix::from_rows(rows))
    }
}
