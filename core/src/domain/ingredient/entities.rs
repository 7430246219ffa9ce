use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::value_objects::RiskLevel;

pub const SIDE_EFFECTS_DELIMITER: &str = ", ";

/// Canonical catalog record. Its risk fields reflect the first analysis that
/// mentioned the ingredient and are never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub risk_level: RiskLevel,
    pub side_effects: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    pub name: String,
    pub description: String,
    pub category: String,
    pub risk_level: RiskLevel,
    pub side_effects: String,
}

impl NewIngredient {
    pub fn new(
        name: &str,
        description: &str,
        category: &str,
        risk_level: RiskLevel,
        side_effects: &[String],
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.to_string(),
            category: category.to_string(),
            risk_level,
            side_effects: flatten_side_effects(side_effects),
        }
    }
}

pub fn flatten_side_effects(side_effects: &[String]) -> String {
    side_effects
        .iter()
        .map(|effect| effect.trim())
        .filter(|effect| !effect.is_empty())
        .collect::<Vec<_>>()
        .join(SIDE_EFFECTS_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_effects_are_flattened_in_order() {
        let effects = vec![
            " headaches ".to_string(),
            String::new(),
            "bloating".to_string(),
        ];

        assert_eq!(flatten_side_effects(&effects), "headaches, bloating");
    }

    #[test]
    fn new_ingredient_trims_name() {
        let ingredient =
            NewIngredient::new("  Sugar ", "sweetener", "sweetener", RiskLevel::Medium, &[]);

        assert_eq!(ingredient.name, "Sugar");
        assert_eq!(ingredient.side_effects, "");
    }
}
