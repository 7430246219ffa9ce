use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{common::entities::app_errors::CoreError, scan::value_objects::RiskLevel};

pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Structured reply from the model, after unwrapping and decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct AiAnalysisResult {
    pub product_name: String,
    /// Entries are kept undecoded; each one is typed on its own when recorded.
    pub results: Vec<Value>,
    pub safety_score: Option<i32>,
    pub overall_assessment: Option<String>,
    pub warnings_for: Vec<String>,
}

/// One entry of `results` exactly as the model sent it. Field presence is
/// checked per entry so that a single incomplete entry does not sink the
/// whole reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredientAnalysis {
    #[serde(default)]
    pub ingredient_name: Option<String>,
    #[serde(default)]
    pub risk: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub side_effects: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientAnalysis {
    pub ingredient_name: String,
    pub risk: RiskLevel,
    pub severity: String,
    pub explanation: String,
    pub description: String,
    pub category: String,
    pub side_effects: Vec<String>,
}

impl RawIngredientAnalysis {
    /// Types one element of `results`. A wrong-typed entry (a bare string, a
    /// numeric `risk`, a string `sideEffects`) fails alone as `Malformed`.
    pub fn from_value(value: Value, index: usize) -> Result<Self, IngredientProcessingError> {
        let ingredient_name = value
            .get("ingredientName")
            .and_then(Value::as_str)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        serde_json::from_value(value).map_err(|e| {
            IngredientProcessingError::new(
                index,
                ingredient_name,
                IngredientFailure::Malformed(e.to_string()),
            )
        })
    }

    pub fn validate(
        self,
        index: usize,
    ) -> Result<IngredientAnalysis, IngredientProcessingError> {
        let ingredient_name = self
            .ingredient_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                IngredientProcessingError::new(
                    index,
                    None,
                    IngredientFailure::MissingField("ingredientName"),
                )
            })?;

        let risk = match self.risk.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(IngredientProcessingError::new(
                    index,
                    Some(ingredient_name),
                    IngredientFailure::MissingField("risk"),
                ));
            }
            Some(value) => value.parse::<RiskLevel>().map_err(|value| {
                IngredientProcessingError::new(
                    index,
                    Some(ingredient_name.clone()),
                    IngredientFailure::InvalidRisk(value),
                )
            })?,
        };

        Ok(IngredientAnalysis {
            ingredient_name,
            risk,
            severity: self.severity.unwrap_or_default(),
            explanation: self.explanation.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            side_effects: self.side_effects.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngredientFailure {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed entry: {0}")]
    Malformed(String),

    #[error("unrecognised risk level `{0}`")]
    InvalidRisk(String),

    #[error("persistence failed: {0}")]
    Persistence(CoreError),
}

/// Non-fatal failure of a single ingredient entry within a scan.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("ingredient entry #{index} skipped: {reason}")]
pub struct IngredientProcessingError {
    pub index: usize,
    pub ingredient_name: Option<String>,
    pub reason: IngredientFailure,
}

impl IngredientProcessingError {
    pub fn new(index: usize, ingredient_name: Option<String>, reason: IngredientFailure) -> Self {
        Self {
            index,
            ingredient_name,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(name: Option<&str>, risk: Option<&str>) -> RawIngredientAnalysis {
        RawIngredientAnalysis {
            ingredient_name: name.map(str::to_string),
            risk: risk.map(str::to_string),
            severity: Some("Moderate".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn complete_entry_validates_with_defaults_for_optional_fields() {
        let analysis = entry(Some(" Sugar "), Some("medium")).validate(0).unwrap();

        assert_eq!(analysis.ingredient_name, "Sugar");
        assert_eq!(analysis.risk, RiskLevel::Medium);
        assert_eq!(analysis.severity, "Moderate");
        assert!(analysis.side_effects.is_empty());
        assert_eq!(analysis.description, "");
    }

    #[test]
    fn missing_name_is_reported_with_its_index() {
        let err = entry(None, Some("LOW")).validate(3).unwrap_err();

        assert_eq!(err.index, 3);
        assert_eq!(err.ingredient_name, None);
        assert_eq!(err.reason, IngredientFailure::MissingField("ingredientName"));
    }

    #[test]
    fn wrong_typed_entries_are_malformed() {
        let string_effects = RawIngredientAnalysis::from_value(
            json!({"ingredientName": "Pectin", "risk": "LOW", "sideEffects": "none"}),
            2,
        )
        .unwrap_err();
        assert_eq!(string_effects.index, 2);
        assert_eq!(string_effects.ingredient_name.as_deref(), Some("Pectin"));
        assert!(matches!(string_effects.reason, IngredientFailure::Malformed(_)));

        let numeric_risk =
            RawIngredientAnalysis::from_value(json!({"ingredientName": "Salt", "risk": 2}), 0)
                .unwrap_err();
        assert!(matches!(numeric_risk.reason, IngredientFailure::Malformed(_)));

        let bare = RawIngredientAnalysis::from_value(json!("Pectin"), 1).unwrap_err();
        assert_eq!(bare.ingredient_name, None);
        assert!(matches!(bare.reason, IngredientFailure::Malformed(_)));
    }

    #[test]
    fn loose_entry_decodes_with_missing_fields() {
        let raw = RawIngredientAnalysis::from_value(json!({"ingredientName": "Salt"}), 0).unwrap();

        assert_eq!(raw.ingredient_name.as_deref(), Some("Salt"));
        assert_eq!(raw.risk, None);
    }

    #[test]
    fn missing_or_unknown_risk_is_rejected() {
        let missing = entry(Some("Salt"), None).validate(1).unwrap_err();
        assert_eq!(missing.reason, IngredientFailure::MissingField("risk"));
        assert_eq!(missing.ingredient_name.as_deref(), Some("Salt"));

        let unknown = entry(Some("Salt"), Some("SEVERE")).validate(1).unwrap_err();
        assert_eq!(
            unknown.reason,
            IngredientFailure::InvalidRisk("SEVERE".to_string())
        );
    }
}
