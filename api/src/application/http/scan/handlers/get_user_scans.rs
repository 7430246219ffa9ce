use axum::extract::{Path, Query, State};
use nutriscan_core::domain::scan::{
    entities::ScanDetails, ports::ScanService, value_objects::ListScansFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    scan::validators::ListScansParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanListResponse {
    pub data: Vec<ScanDetails>,
}

#[utoipa::path(
    get,
    path = "/{user_id}/scans",
    tag = "scans",
    summary = "List a user's scans",
    description = "Scans of one user, newest first, optionally filtered by product name",
    responses(
        (status = 200, body = ScanListResponse),
        (status = 404, description = "Unknown user")
    ),
    params(
        ("user_id" = i64, Path, description = "User id"),
        ListScansParams
    ),
)]
pub async fn get_user_scans(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Query(params): Query<ListScansParams>,
) -> Result<Response<ScanListResponse>, ApiError> {
    let scans = state
        .service
        .list_user_scans(user_id, ListScansFilter::from(params))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanListResponse { data: scans }))
}
