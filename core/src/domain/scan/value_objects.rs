use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Risk tier reported per ingredient. Ordered from least to most harmful.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCategory {
    #[default]
    Food,
    Cosmetics,
    Beverages,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Food => "FOOD",
            ProductCategory::Cosmetics => "COSMETICS",
            ProductCategory::Beverages => "BEVERAGES",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FOOD" => Ok(ProductCategory::Food),
            "COSMETICS" => Ok(ProductCategory::Cosmetics),
            "BEVERAGES" => Ok(ProductCategory::Beverages),
            _ => Err(CoreError::InvalidInput(
                "category must be one of FOOD, COSMETICS, BEVERAGES".to_string(),
            )),
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image bytes forwarded verbatim to the model.
#[derive(Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSource {
    Text { ingredients_text: String },
    Image(InlineImage),
}

impl AnalysisSource {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisSource::Text { .. } => "text",
            AnalysisSource::Image(_) => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub source: AnalysisSource,
    pub category: ProductCategory,
    pub user_id: i64,
}

impl AnalysisRequest {
    /// Rejects requests that cannot produce a meaningful prompt.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.source {
            AnalysisSource::Text { ingredients_text } if ingredients_text.trim().is_empty() => Err(
                CoreError::InvalidInput("ingredients text must not be empty".to_string()),
            ),
            AnalysisSource::Image(image) if image.data.is_empty() => Err(
                CoreError::InvalidInput("image must not be empty".to_string()),
            ),
            AnalysisSource::Image(image) if !image.mime_type.starts_with("image/") => {
                Err(CoreError::InvalidInput(format!(
                    "unsupported image type `{}`",
                    image.mime_type
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScansFilter {
    /// Case-insensitive substring match on the product name.
    pub product_name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_parses_any_case() {
        assert_eq!(" low ".parse::<RiskLevel>(), Ok(RiskLevel::Low));
        assert_eq!("Medium".parse::<RiskLevel>(), Ok(RiskLevel::Medium));
        assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert!("SEVERE".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn risk_levels_are_ordered_by_harm() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn category_rejects_unknown_values() {
        assert_eq!(
            "cosmetics".parse::<ProductCategory>(),
            Ok(ProductCategory::Cosmetics)
        );
        assert!(matches!(
            "TOYS".parse::<ProductCategory>(),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_blank_text_and_non_image_payloads() {
        let blank = AnalysisRequest {
            source: AnalysisSource::Text {
                ingredients_text: "  \n".to_string(),
            },
            category: ProductCategory::Food,
            user_id: 1,
        };
        assert!(matches!(blank.validate(), Err(CoreError::InvalidInput(_))));

        let pdf = AnalysisRequest {
            source: AnalysisSource::Image(InlineImage {
                mime_type: "application/pdf".to_string(),
                data: vec![1, 2, 3],
            }),
            category: ProductCategory::Food,
            user_id: 1,
        };
        assert!(matches!(pdf.validate(), Err(CoreError::InvalidInput(_))));

        let png = AnalysisRequest {
            source: AnalysisSource::Image(InlineImage {
                mime_type: "image/png".to_string(),
                data: vec![1, 2, 3],
            }),
            category: ProductCategory::Food,
            user_id: 1,
        };
        assert!(png.validate().is_ok());
    }
}
