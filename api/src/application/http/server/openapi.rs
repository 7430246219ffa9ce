use crate::application::http::{
    health::HealthApiDoc, scan::router::ScanApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriScan API"
    ),
    nest(
        (path = "/scans", api = ScanApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
