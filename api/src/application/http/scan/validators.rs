use std::str::FromStr;

use nutriscan_core::domain::scan::value_objects::{ListScansFilter, ProductCategory};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(
        min = 1,
        max = 20000,
        message = "ingredients_text must be between 1 and 20000 characters"
    ))]
    pub ingredients_text: String,
    /// FOOD, COSMETICS or BEVERAGES. Defaults to FOOD.
    #[schema(example = "FOOD")]
    pub category: Option<String>,
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListScansParams {
    /// Case-insensitive substring of the product name.
    pub product_name: Option<String>,
    #[schema(example = 0)]
    pub offset: Option<u32>,
    /// Defaults to and is capped at 100.
    #[schema(example = 20)]
    pub limit: Option<u32>,
}

impl From<ListScansParams> for ListScansFilter {
    fn from(params: ListScansParams) -> Self {
        Self {
            product_name: params.product_name,
            offset: params.offset,
            limit: Some(params.limit.map_or(MAX_PAGE_SIZE, |limit| limit.min(MAX_PAGE_SIZE))),
        }
    }
}

/// Blank or missing means the default category.
pub fn parse_category(value: Option<&str>) -> Result<ProductCategory, ApiError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(ProductCategory::default()),
        Some(value) => ProductCategory::from_str(value).map_err(ApiError::from),
    }
}

/// Guesses an image MIME type from a file name when the multipart part has
/// no usable content type.
pub fn guess_image_mime(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
