use axum::extract::State;
use nutriscan_core::domain::scan::{
    entities::ScanDetails,
    ports::ScanService,
    value_objects::{AnalysisRequest, AnalysisSource},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    scan::validators::{AnalyzeTextRequest, parse_category},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanDetailsResponse {
    pub data: ScanDetails,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "scans",
    summary = "Scan an ingredient list",
    description = "Analyzes a pasted ingredient list and stores the scan",
    responses(
        (status = 201, body = ScanDetailsResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Unknown user"),
        (status = 502, description = "LLM provider failure")
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<ScanDetailsResponse>, ApiError> {
    let category = parse_category(payload.category.as_deref())?;

    let scan = state
        .service
        .process_scan(AnalysisRequest {
            source: AnalysisSource::Text {
                ingredients_text: payload.ingredients_text,
            },
            category,
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    let details = state
        .service
        .get_scan(scan.id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ScanDetailsResponse { data: details }))
}
