use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::{
    entities::{Scan, ScanResultDetails, ScanSummary},
    value_objects::ProductCategory,
};

/// Read model returned for a scan: the scan row, its findings and the summary
/// computed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanDetails {
    pub scan_id: i64,
    pub product_name: String,
    pub category: ProductCategory,
    pub safety_score: Option<i32>,
    pub overall_assessment: Option<String>,
    pub scanned_at: DateTime<Utc>,
    pub user_id: i64,
    pub user_name: String,
    pub results: Vec<ScanResultDetails>,
    pub summary: ScanSummary,
}

impl ScanDetails {
    pub fn new(scan: Scan, user_name: String, results: Vec<ScanResultDetails>) -> Self {
        let summary = ScanSummary::from_risks(results.iter().map(|result| result.risk));

        Self {
            scan_id: scan.id,
            product_name: scan.product_name,
            category: scan.category,
            safety_score: scan.safety_score,
            overall_assessment: scan.overall_assessment,
            scanned_at: scan.scanned_at,
            user_id: scan.user_id,
            user_name,
            results,
            summary,
        }
    }
}
