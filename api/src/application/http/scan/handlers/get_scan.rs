use axum::extract::{Path, State};
use nutriscan_core::domain::scan::ports::ScanService;

use crate::application::http::{
    scan::handlers::analyze_text::ScanDetailsResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{scan_id}",
    tag = "scans",
    summary = "Get a scan",
    description = "Returns a stored scan with its results and risk summary",
    responses(
        (status = 200, body = ScanDetailsResponse),
        (status = 404, description = "Scan not found")
    ),
    params(
        ("scan_id" = i64, Path, description = "Scan id"),
    ),
)]
pub async fn get_scan(
    Path(scan_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<ScanDetailsResponse>, ApiError> {
    let details = state
        .service
        .get_scan(scan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScanDetailsResponse { data: details }))
}
