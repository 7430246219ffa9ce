use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::entities::{Scan, ScanResult, ScanResultDetails},
    },
    entity::{ingredients, scan_results, scans},
    infrastructure::ingredient::mappers::parse_stored_risk,
};

impl TryFrom<&scans::Model> for Scan {
    type Error = CoreError;

    fn try_from(model: &scans::Model) -> Result<Self, Self::Error> {
        let category = model.category.parse().map_err(|e| {
            error!("Invalid category stored for scan {}: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            product_name: model.product_name.clone(),
            user_id: model.user_id,
            category,
            safety_score: model.safety_score,
            overall_assessment: model.overall_assessment.clone(),
            scanned_at: model.scanned_at.to_utc(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        })
    }
}

impl TryFrom<scans::Model> for Scan {
    type Error = CoreError;

    fn try_from(model: scans::Model) -> Result<Self, Self::Error> {
        Self::try_from(&model)
    }
}

impl TryFrom<scan_results::Model> for ScanResult {
    type Error = CoreError;

    fn try_from(model: scan_results::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            scan_id: model.scan_id,
            ingredient_id: model.ingredient_id,
            risk: parse_stored_risk(&model.risk)?,
            severity: model.severity,
            explanation: model.explanation,
        })
    }
}

/// Joins a stored result with its catalog row.
pub fn to_result_details(
    result: scan_results::Model,
    ingredient: ingredients::Model,
) -> Result<ScanResultDetails, CoreError> {
    Ok(ScanResultDetails {
        result_id: result.id,
        ingredient_id: ingredient.id,
        ingredient_name: ingredient.name,
        risk: parse_stored_risk(&result.risk)?,
        severity: result.severity,
        explanation: result.explanation,
        description: ingredient.description,
        category: ingredient.category,
        side_effects: ingredient.side_effects,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::scan::value_objects::{ProductCategory, RiskLevel};

    fn scan_model(category: &str) -> scans::Model {
        let now = Utc::now().fixed_offset();
        scans::Model {
            id: 3,
            product_name: "Lotion".to_string(),
            user_id: 1,
            category: category.to_string(),
            safety_score: Some(8),
            overall_assessment: None,
            scanned_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn maps_stored_scan() {
        let scan = Scan::try_from(scan_model("COSMETICS")).unwrap();

        assert_eq!(scan.category, ProductCategory::Cosmetics);
        assert_eq!(scan.safety_score, Some(8));
    }

    #[test]
    fn unknown_stored_category_is_an_internal_error() {
        assert_eq!(
            Scan::try_from(scan_model("TOYS")).unwrap_err(),
            CoreError::InternalServerError
        );
    }

    #[test]
    fn result_details_take_risk_from_the_scan_result() {
        let details = to_result_details(
            scan_results::Model {
                id: 11,
                scan_id: 3,
                ingredient_id: 5,
                risk: "HIGH".to_string(),
                severity: "Severe".to_string(),
                explanation: "irritant".to_string(),
            },
            ingredients::Model {
                id: 5,
                name: "Fragrance".to_string(),
                description: "perfume mix".to_string(),
                category: "fragrance".to_string(),
                risk_level: "MEDIUM".to_string(),
                side_effects: "rashes, itching".to_string(),
                created_at: Utc::now().fixed_offset(),
            },
        )
        .unwrap();

        assert_eq!(details.risk, RiskLevel::High);
        assert_eq!(details.ingredient_name, "Fragrance");
        assert_eq!(details.side_effects, "rashes, itching");
    }
}
