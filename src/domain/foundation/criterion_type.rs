//! Criterion directionality (benefit or cost).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether higher (benefit) or lower (cost) raw values are preferable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionType {
    #[default]
    #[serde(rename = "max", alias = "benefit")]
    Benefit,
    #[serde(rename = "min", alias = "cost")]
    Cost,
}

impl CriterionType {
    /// Returns the payload keyword ("max" or "min").
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "max",
            CriterionType::Cost => "min",
        }
    }

    /// Parses a payload keyword, accepting the same aliases as deserialization.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "max" | "benefit" => Some(CriterionType::Benefit),
            "min" | "cost" => Some(CriterionType::Cost),
            _ => None,
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
