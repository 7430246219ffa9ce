use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::value_objects::RiskLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanResult {
    pub id: i64,
    pub scan_id: i64,
    pub ingredient_id: i64,
    pub risk: RiskLevel,
    pub severity: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScanResult {
    pub scan_id: i64,
    pub ingredient_id: i64,
    pub risk: RiskLevel,
    pub severity: String,
    pub explanation: String,
}

/// A stored finding joined with the catalog entry it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanResultDetails {
    pub result_id: i64,
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub risk: RiskLevel,
    pub severity: String,
    pub explanation: String,
    pub description: String,
    pub category: String,
    pub side_effects: String,
}
