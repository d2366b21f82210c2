//! Request and response DTOs exchanged with the surrounding application.
//!
//! Requests arrive as `{ "method": "Fuzzy_TOPSIS", "parameters": { ... } }`
//! and responses leave as `{ "results": { ... } }`. Maps are `BTreeMap`s so
//! validation errors and serialized output are deterministic.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{
    CriterionType, DomainError, TriangularFuzzyNumber, ValidationError,
};
use crate::domain::topsis::{validate_identifiers, DecisionProblem, IdealSolutionPolicy, TopsisAnalysis};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Decision method requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "Fuzzy_TOPSIS")]
    FuzzyTopsis,
}

/// Request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyTopsisRequest {
    pub method: Method,
    pub parameters: FuzzyTopsisParameters,
}

impl FuzzyTopsisRequest {
    pub fn new(parameters: FuzzyTopsisParameters) -> Self {
        Self {
            method: Method::FuzzyTopsis,
            parameters,
        }
    }
}

/// Raw Fuzzy TOPSIS input as entered by the user.
///
/// Ratings, weights, and criterion types stay untyped until [`to_problem`]
/// so that a wrong type or arity is reported against the exact field.
///
/// [`to_problem`]: FuzzyTopsisParameters::to_problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyTopsisParameters {
    /// Alternative identifiers; order breaks ranking ties.
    pub alternatives: Vec<String>,
    /// Criterion identifiers; order of the triples in each performance row.
    pub criteria: Vec<String>,
    /// One `[l, m, u]` triple per criterion for every alternative.
    pub performance_matrix: BTreeMap<String, Vec<Value>>,
    /// `"max"` or `"min"` per criterion.
    pub criteria_types: BTreeMap<String, Value>,
    /// One `[l, m, u]` triple per criterion.
    pub weights: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_solution_policy: Option<IdealSolutionPolicy>,
}

impl FuzzyTopsisParameters {
    /// Validates the raw input and converts it into a decision problem.
    ///
    /// # Errors
    /// - Empty, blank, or duplicate identifiers
    /// - Keyed maps whose keys differ from the `alternatives` / `criteria` arrays
    /// - Performance rows with the wrong number of triples
    /// - Triples that are not arrays of three numbers
    /// - Triples that are negative, non-finite, or out of order
    /// - Criterion types other than `"max"` / `"min"`
    pub fn to_problem(&self) -> Result<DecisionProblem, ValidationError> {
        validate_identifiers("alternatives", self.alternatives.iter().map(String::as_str))?;
        validate_identifiers("criteria", self.criteria.iter().map(String::as_str))?;

        check_keys("performance_matrix", &self.alternatives, self.performance_matrix.keys())?;
        check_keys("criteria_types", &self.criteria, self.criteria_types.keys())?;
        check_keys("weights", &self.criteria, self.weights.keys())?;

        let mut builder = DecisionProblem::builder().alternatives(self.alternatives.clone());

        for criterion in &self.criteria {
            let kind = parse_criterion_type(
                lookup(&self.criteria_types, "criteria_types", criterion)?,
                &format!("criteria_types.{}", criterion),
            )?;
            let weight = parse_triple(
                lookup(&self.weights, "weights", criterion)?,
                &format!("weights.{}", criterion),
            )?;
            builder = builder.criterion(criterion.clone(), kind, weight);
        }

        for alternative in &self.alternatives {
            let field = format!("performance_matrix.{}", alternative);
            let row = lookup(&self.performance_matrix, "performance_matrix", alternative)?;
            if row.len() != self.criteria.len() {
                return Err(ValidationError::length_mismatch(
                    field,
                    self.criteria.len(),
                    row.len(),
                ));
            }
            for (criterion, triple) in self.criteria.iter().zip(row) {
                let value = parse_triple(triple, &format!("{}[{}]", field, criterion))?;
                builder = builder.cell(alternative.clone(), criterion.clone(), value);
            }
        }

        builder.build()
    }
}

/// Checks that a keyed map covers exactly the identifiers of its array.
fn check_keys<'a>(
    field: &str,
    expected: &[String],
    keys: impl Iterator<Item = &'a String>,
) -> Result<(), ValidationError> {
    let keys: BTreeSet<&str> = keys.map(String::as_str).collect();
    for id in expected {
        if !keys.contains(id.as_str()) {
            return Err(ValidationError::missing_entry(field, id.clone()));
        }
    }
    let known: BTreeSet<&str> = expected.iter().map(String::as_str).collect();
    if let Some(unknown) = keys.difference(&known).next() {
        return Err(ValidationError::unknown_entry(field, *unknown));
    }
    Ok(())
}

fn lookup<'a, T>(
    map: &'a BTreeMap<String, T>,
    field: &str,
    key: &str,
) -> Result<&'a T, ValidationError> {
    map.get(key)
        .ok_or_else(|| ValidationError::missing_entry(field, key))
}

/// Reads a `[l, m, u]` array of numbers into a fuzzy number.
fn parse_triple(value: &Value, field: &str) -> Result<TriangularFuzzyNumber, ValidationError> {
    let items = value.as_array().ok_or_else(|| {
        ValidationError::invalid_value(field, format!("expected an array of three numbers, got {}", value))
    })?;
    if items.len() != 3 {
        return Err(ValidationError::length_mismatch(field, 3, items.len()));
    }

    let mut components = [0.0; 3];
    for (index, item) in items.iter().enumerate() {
        components[index] = item.as_f64().ok_or_else(|| {
            ValidationError::invalid_value(
                field,
                format!("component {} must be a number, got {}", index, item),
            )
        })?;
    }
    TriangularFuzzyNumber::try_from(components).map_err(|e| e.at(field))
}

fn parse_criterion_type(value: &Value, field: &str) -> Result<CriterionType, ValidationError> {
    value.as_str().and_then(CriterionType::parse).ok_or_else(|| {
        ValidationError::invalid_value(field, format!("expected \"max\" or \"min\", got {}", value))
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyTopsisResponse {
    pub results: FuzzyTopsisResults,
}

/// Ranking results, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyTopsisResults {
    /// Alternatives by descending closeness coefficient.
    pub ranking: Vec<String>,
    pub best_alternative: String,
    /// Closeness coefficient per alternative.
    pub proximities: BTreeMap<String, f64>,
    pub distances: BTreeMap<String, DistanceDto>,
}

/// Distances of one alternative to FPIS (`ideal`) and FNIS (`negative_ideal`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceDto {
    pub ideal: f64,
    pub negative_ideal: f64,
}

impl FuzzyTopsisResults {
    /// Builds display results, rounding to `precision` decimal places.
    pub fn from_analysis(analysis: &TopsisAnalysis, precision: u32) -> Self {
        let entries = analysis.ranking.entries();

        Self {
            ranking: entries.iter().map(|e| e.alternative.clone()).collect(),
            best_alternative: analysis.best_alternative().unwrap_or_default().to_string(),
            proximities: entries
                .iter()
                .map(|e| (e.alternative.clone(), round_to(e.closeness, precision)))
                .collect(),
            distances: entries
                .iter()
                .map(|e| {
                    (
                        e.alternative.clone(),
                        DistanceDto {
                            ideal: round_to(e.distances.to_ideal, precision),
                            negative_ideal: round_to(e.distances.to_negative_ideal, precision),
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Rounds half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: err
                .details
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::topsis::FuzzyTopsis;
    use serde_json::json;

    fn parameters() -> FuzzyTopsisParameters {
        FuzzyTopsisParameters {
            alternatives: vec!["F1".to_string(), "F2".to_string()],
            criteria: vec!["C1".to_string(), "C2".to_string()],
            performance_matrix: BTreeMap::from([
                ("F1".to_string(), vec![json!([0.6, 0.7, 0.8]), json!([0.2, 0.3, 0.4])]),
                ("F2".to_string(), vec![json!([0.5, 0.6, 0.7]), json!([0.1, 0.2, 0.3])]),
            ]),
            criteria_types: BTreeMap::from([
                ("C1".to_string(), json!("max")),
                ("C2".to_string(), json!("min")),
            ]),
            weights: BTreeMap::from([
                ("C1".to_string(), json!([0.3, 0.4, 0.5])),
                ("C2".to_string(), json!([0.1, 0.2, 0.3])),
            ]),
            ideal_solution_policy: None,
        }
    }

    #[test]
    fn request_deserializes_from_envelope() {
        let json = r#"{
            "method": "Fuzzy_TOPSIS",
            "parameters": {
                "alternatives": ["F1"],
                "criteria": ["C1"],
                "performance_matrix": { "F1": [[0.6, 0.7, 0.8]] },
                "criteria_types": { "C1": "max" },
                "weights": { "C1": [0.3, 0.4, 0.5] }
            }
        }"#;

        let request: FuzzyTopsisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.method, Method::FuzzyTopsis);
        assert_eq!(request.parameters.criteria_types["C1"], json!("max"));
        assert!(request.parameters.ideal_solution_policy.is_none());

        let problem = request.parameters.to_problem().unwrap();
        assert_eq!(problem.criteria()[0].kind, CriterionType::Benefit);
    }

    #[test]
    fn request_rejects_unknown_method() {
        let json = r#"{ "method": "AHP", "parameters": {} }"#;
        let result: Result<FuzzyTopsisRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn to_problem_keeps_criteria_order() {
        let problem = parameters().to_problem().unwrap();

        assert_eq!(problem.criteria()[0].id, "C1");
        assert_eq!(problem.criteria()[1].kind, CriterionType::Cost);
        assert_eq!(
            problem.performance().get(1, 1).map(|v| v.to_array()),
            Some([0.1, 0.2, 0.3])
        );
    }

    #[test]
    fn to_problem_rejects_missing_weight() {
        let mut params = parameters();
        params.weights.remove("C2");
        assert_eq!(
            params.to_problem(),
            Err(ValidationError::missing_entry("weights", "C2"))
        );
    }

    #[test]
    fn to_problem_rejects_unknown_criterion_type() {
        let mut params = parameters();
        params
            .criteria_types
            .insert("C9".to_string(), json!("max"));
        assert_eq!(
            params.to_problem(),
            Err(ValidationError::unknown_entry("criteria_types", "C9"))
        );
    }

    #[test]
    fn to_problem_rejects_missing_alternative_row() {
        let mut params = parameters();
        params.performance_matrix.remove("F2");
        assert_eq!(
            params.to_problem(),
            Err(ValidationError::missing_entry("performance_matrix", "F2"))
        );
    }

    #[test]
    fn to_problem_rejects_short_row() {
        let mut params = parameters();
        params
            .performance_matrix
            .insert("F1".to_string(), vec![json!([0.6, 0.7, 0.8])]);
        assert_eq!(
            params.to_problem(),
            Err(ValidationError::length_mismatch("performance_matrix.F1", 2, 1))
        );
    }

    #[test]
    fn to_problem_names_malformed_cell() {
        let mut params = parameters();
        params
            .performance_matrix
            .insert("F2".to_string(), vec![json!([0.5, 0.6, 0.7]), json!([0.3, 0.2, 0.1])]);

        let err = params.to_problem().unwrap_err();
        assert_eq!(err.field(), "performance_matrix.F2[C2]");
        assert!(matches!(err, ValidationError::MalformedFuzzyNumber { .. }));
    }

    #[test]
    fn to_problem_names_negative_weight() {
        let mut params = parameters();
        params.weights.insert("C1".to_string(), json!([-0.1, 0.4, 0.5]));

        let err = params.to_problem().unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("weights.C1", -0.1));
    }

    #[test]
    fn to_problem_names_non_numeric_component() {
        let mut params = parameters();
        params
            .performance_matrix
            .insert("F2".to_string(), vec![json!(["0.5", 0.6, 0.7]), json!([0.1, 0.2, 0.3])]);

        let err = params.to_problem().unwrap_err();
        assert_eq!(err.field(), "performance_matrix.F2[C1]");
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
        assert!(err.to_string().contains("component 0"));
    }

    #[test]
    fn to_problem_names_short_triple() {
        let mut params = parameters();
        params
            .performance_matrix
            .insert("F2".to_string(), vec![json!([0.5, 0.6]), json!([0.1, 0.2, 0.3])]);

        assert_eq!(
            params.to_problem(),
            Err(ValidationError::length_mismatch("performance_matrix.F2[C1]", 3, 2))
        );
    }

    #[test]
    fn to_problem_names_weight_that_is_not_an_array() {
        let mut params = parameters();
        params.weights.insert("C2".to_string(), json!(0.2));

        let err = params.to_problem().unwrap_err();
        assert_eq!(err.field(), "weights.C2");
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn to_problem_names_unknown_criterion_keyword() {
        let mut params = parameters();
        params
            .criteria_types
            .insert("C2".to_string(), json!("sideways"));

        let err = params.to_problem().unwrap_err();
        assert_eq!(err.field(), "criteria_types.C2");
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn to_problem_accepts_criterion_aliases() {
        let mut params = parameters();
        params.criteria_types.insert("C1".to_string(), json!("benefit"));
        params.criteria_types.insert("C2".to_string(), json!("cost"));

        let problem = params.to_problem().unwrap();
        assert_eq!(problem.criteria()[0].kind, CriterionType::Benefit);
        assert_eq!(problem.criteria()[1].kind, CriterionType::Cost);
    }

    #[test]
    fn to_problem_rejects_duplicate_criteria() {
        let mut params = parameters();
        params.criteria.push("C1".to_string());
        assert_eq!(
            params.to_problem(),
            Err(ValidationError::duplicate_identifier("criteria", "C1"))
        );
    }

    #[test]
    fn results_round_only_at_the_boundary() {
        let problem = parameters().to_problem().unwrap();
        let analysis = FuzzyTopsis::default().evaluate(&problem).unwrap();

        let results = FuzzyTopsisResults::from_analysis(&analysis, 4);

        assert_eq!(results.ranking.len(), 2);
        assert_eq!(results.best_alternative, results.ranking[0]);
        for entry in analysis.ranking.entries() {
            let shown = results.proximities[&entry.alternative];
            assert!((shown - entry.closeness).abs() <= 0.00005 + 1e-12);
            assert_eq!(shown, round_to(shown, 4));
        }
    }

    #[test]
    fn round_to_uses_requested_precision() {
        assert_eq!(round_to(0.530_694_2, 4), 0.5307);
        assert_eq!(round_to(0.421_449, 2), 0.42);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn response_serializes_expected_shape() {
        let response = FuzzyTopsisResponse {
            results: FuzzyTopsisResults {
                ranking: vec!["F1".to_string()],
                best_alternative: "F1".to_string(),
                proximities: BTreeMap::from([("F1".to_string(), 0.5307)]),
                distances: BTreeMap::from([(
                    "F1".to_string(),
                    DistanceDto {
                        ideal: 0.1809,
                        negative_ideal: 0.2045,
                    },
                )]),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["results"]["best_alternative"], "F1");
        assert_eq!(json["results"]["proximities"]["F1"], 0.5307);
        assert_eq!(json["results"]["distances"]["F1"]["negative_ideal"], 0.2045);
    }

    #[test]
    fn error_response_copies_code_and_details() {
        let err = DomainError::new(ErrorCode::DegenerateCriterion, "bad column")
            .with_detail("criterion", "C1");
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "DEGENERATE_CRITERION");
        assert_eq!(response.details.get("criterion"), Some(&"C1".to_string()));
    }
}
