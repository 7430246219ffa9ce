use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::value_objects::ProductCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Scan {
    pub id: i64,
    pub product_name: String,
    pub user_id: i64,
    pub category: ProductCategory,
    pub safety_score: Option<i32>,
    pub overall_assessment: Option<String>,
    pub scanned_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScan {
    pub product_name: String,
    pub user_id: i64,
    pub category: ProductCategory,
    pub safety_score: Option<i32>,
    pub overall_assessment: Option<String>,
    pub scanned_at: DateTime<Utc>,
}

impl NewScan {
    pub fn new(
        product_name: String,
        user_id: i64,
        category: ProductCategory,
        safety_score: Option<i32>,
        overall_assessment: Option<String>,
    ) -> Self {
        Self {
            product_name,
            user_id,
            category,
            safety_score,
            overall_assessment,
            scanned_at: Utc::now(),
        }
    }
}
