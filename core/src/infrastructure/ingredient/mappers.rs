use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError, ingredient::entities::Ingredient,
        scan::value_objects::RiskLevel,
    },
    entity::ingredients,
};

/// Parses a stored risk tier. The column is constrained, so an unknown value
/// means the row was written outside this service.
pub fn parse_stored_risk(value: &str) -> Result<RiskLevel, CoreError> {
    value.parse::<RiskLevel>().map_err(|e| {
        error!("Invalid risk level stored in database: {}", e);
        CoreError::InternalServerError
    })
}

impl TryFrom<&ingredients::Model> for Ingredient {
    type Error = CoreError;

    fn try_from(model: &ingredients::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            category: model.category.clone(),
            risk_level: parse_stored_risk(&model.risk_level)?,
            side_effects: model.side_effects.clone(),
            created_at: model.created_at.to_utc(),
        })
    }
}

impl TryFrom<ingredients::Model> for Ingredient {
    type Error = CoreError;

    fn try_from(model: ingredients::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn model(risk_level: &str) -> ingredients::Model {
        ingredients::Model {
            id: 7,
            name: "Sucralose".to_string(),
            description: "sweetener".to_string(),
            category: "sweetener".to_string(),
            risk_level: risk_level.to_string(),
            side_effects: "bloating".to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn maps_stored_row() {
        let ingredient = Ingredient::try_from(model("MEDIUM")).unwrap();

        assert_eq!(ingredient.id, 7);
        assert_eq!(ingredient.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn unknown_stored_risk_is_an_internal_error() {
        assert_eq!(
            Ingredient::try_from(model("SEVERE")).unwrap_err(),
            CoreError::InternalServerError
        );
    }
}
