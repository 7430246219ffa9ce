use sea_orm::{
    ActiveValue::Set,
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::{
            entities::{NewScan, NewScanResult, Scan, ScanResult, ScanResultDetails},
            ports::ScanRepository,
            value_objects::ListScansFilter,
        },
    },
    entity::{
        ingredients::Entity as IngredientEntity,
        scan_results::{
            ActiveModel as ResultActiveModel, Column as ResultColumn, Entity as ResultEntity,
        },
        scans::{ActiveModel as ScanActiveModel, Column as ScanColumn, Entity as ScanEntity},
    },
    infrastructure::scan::mappers::to_result_details,
};

#[derive(Debug, Clone)]
pub struct PostgresScanRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds a LIKE pattern matching `needle` anywhere, with wildcards escaped.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .trim()
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}

impl ScanRepository for PostgresScanRepository {
    async fn create_scan(&self, scan: NewScan) -> Result<Scan, CoreError> {
        let scanned_at = scan.scanned_at.fixed_offset();

        let created = ScanEntity::insert(ScanActiveModel {
            product_name: Set(scan.product_name),
            user_id: Set(scan.user_id),
            category: Set(scan.category.as_str().to_string()),
            safety_score: Set(scan.safety_score),
            overall_assessment: Set(scan.overall_assessment),
            scanned_at: Set(scanned_at),
            created_at: Set(scanned_at),
            updated_at: Set(scanned_at),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create scan: {}", e);
            CoreError::InternalServerError
        })?;

        Scan::try_from(created)
    }

    async fn create_scan_result(&self, result: NewScanResult) -> Result<ScanResult, CoreError> {
        let created = ResultEntity::insert(ResultActiveModel {
            scan_id: Set(result.scan_id),
            ingredient_id: Set(result.ingredient_id),
            risk: Set(result.risk.as_str().to_string()),
            severity: Set(result.severity),
            explanation: Set(result.explanation),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create scan result: {}", e);
            CoreError::InternalServerError
        })?;

        ScanResult::try_from(created)
    }

    async fn get_scan_by_id(&self, scan_id: i64) -> Result<Option<Scan>, CoreError> {
        let scan = ScanEntity::find_by_id(scan_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get scan: {}", e);
                CoreError::InternalServerError
            })?;

        scan.map(Scan::try_from).transpose()
    }

    async fn get_scans_by_user(
        &self,
        user_id: i64,
        filter: ListScansFilter,
    ) -> Result<Vec<Scan>, CoreError> {
        let mut query = ScanEntity::find().filter(ScanColumn::UserId.eq(user_id));

        if let Some(product_name) = filter.product_name.as_deref()
            && !product_name.trim().is_empty()
        {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(ScanColumn::ProductName)))
                    .like(contains_pattern(product_name)),
            );
        }

        query = query
            .order_by_desc(ScanColumn::ScannedAt)
            .order_by_desc(ScanColumn::Id);

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch scans for user {}: {}", user_id, e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Scan::try_from)
            .collect()
    }

    async fn get_results_by_scan_id(
        &self,
        scan_id: i64,
    ) -> Result<Vec<ScanResultDetails>, CoreError> {
        let rows = ResultEntity::find()
            .filter(ResultColumn::ScanId.eq(scan_id))
            .order_by_asc(ResultColumn::Id)
            .find_also_related(IngredientEntity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch results for scan {}: {}", scan_id, e);
                CoreError::InternalServerError
            })?;

        rows.into_iter()
            .map(|(result, ingredient)| {
                let ingredient = ingredient.ok_or_else(|| {
                    error!(
                        "Scan result {} references missing ingredient {}",
                        result.id, result.ingredient_id
                    );
                    CoreError::InternalServerError
                })?;

                to_result_details(result, ingredient)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_lowercases_and_escapes_wildcards() {
        assert_eq!(contains_pattern(" Cola "), "%cola%");
        assert_eq!(contains_pattern("100%_juice"), "%100\\%\\_juice%");
    }
}
