use super::handlers::{
    analyze_image::{__path_analyze_image, MAX_IMAGE_SIZE, analyze_image},
    analyze_text::{__path_analyze_text, analyze_text},
    get_scan::{__path_get_scan, get_scan},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

// multipart framing on top of the image itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, analyze_image, get_scan))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scans/text", state.args.server.root_path),
            post(analyze_text),
        )
        .route(
            &format!("{}/scans/image", state.args.server.root_path),
            post(analyze_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(
            &format!("{}/scans/{{scan_id}}", state.args.server.root_path),
            get(get_scan),
        )
}
