use axum::extract::{Multipart, State};
use nutriscan_core::domain::scan::{
    ports::ScanService,
    value_objects::{AnalysisRequest, AnalysisSource, InlineImage},
};
use tracing::debug;

use crate::application::http::{
    scan::{
        handlers::analyze_text::ScanDetailsResponse,
        validators::{guess_image_mime, parse_category},
    },
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/image",
    tag = "scans",
    summary = "Scan a label photo",
    description = "Reads the ingredient list from an uploaded image and stores the scan. \
                   Multipart fields: `image` (file), `user_id`, optional `category`.",
    responses(
        (status = 201, body = ScanDetailsResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Unknown user"),
        (status = 502, description = "LLM provider failure")
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanDetailsResponse>, ApiError> {
    let mut user_id: Option<i64> = None;
    let mut category: Option<String> = None;
    let mut image: Option<InlineImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "user_id" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read user_id: {}", e))
                })?;
                user_id = Some(value.trim().parse().map_err(|_| {
                    ApiError::BadRequest("user_id must be an integer".to_string())
                })?);
            }
            "category" => {
                category = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read category: {}", e))
                })?);
            }
            "image" => {
                let mime_type = field
                    .content_type()
                    .filter(|mime| mime.starts_with("image/"))
                    .map(str::to_string)
                    .or_else(|| {
                        field
                            .file_name()
                            .and_then(guess_image_mime)
                            .map(str::to_string)
                    })
                    .ok_or_else(|| {
                        ApiError::BadRequest("Uploaded file is not an image".to_string())
                    })?;

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                debug!(mime_type = %mime_type, bytes = data.len(), "received label image");

                image = Some(InlineImage {
                    mime_type,
                    data: data.to_vec(),
                });
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| ApiError::BadRequest("Missing user_id field".to_string()))?;
    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;
    let category = parse_category(category.as_deref())?;

    let scan = state
        .service
        .process_scan(AnalysisRequest {
            source: AnalysisSource::Image(image),
            category,
            user_id,
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
