use crate::domain::scan::value_objects::{AnalysisSource, ProductCategory};

const RESPONSE_SHAPE: &str = r#"{
  "productName": "string",
  "results": [
    {
      "ingredientName": "string",
      "risk": "LOW | MEDIUM | HIGH",
      "severity": "string (Minimal, Moderate or Severe)",
      "explanation": "string (short health concern)",
      "description": "string (what the ingredient is)",
      "category": "string (for example preservative, sweetener, emulsifier)",
      "sideEffects": ["string"]
    }
  ],
  "safetyScore": 1-10 (integer, 10 is safest),
  "overallAssessment": "string (two or three sentences)",
  "warningsFor": ["string (groups who should avoid the product)"]
}"#;

/// Renders the instruction sent to the model.
///
/// The output depends only on the category and, in text mode, the trimmed
/// ingredient list: no clock, randomness or request metadata is embedded.
pub fn build_analysis_prompt(source: &AnalysisSource, category: ProductCategory) -> String {
    let (task, product_name_hint, coverage_rule) = match source {
        AnalysisSource::Text { ingredients_text } => (
            format!(
                "Ingredients:\n{}\n\nAnalyze every ingredient in the list above.",
                ingredients_text.trim()
            ),
            "Set \"productName\" to \"Unknown Product\" unless the list names the product.",
            "Include every ingredient from the list, in the order required below.",
        ),
        AnalysisSource::Image(_) => (
            "Read the product name and the complete ingredient list from the attached image, \
             then analyze every ingredient."
                .to_string(),
            "Set \"productName\" to the name printed on the product.",
            "Include every ingredient visible in the image.",
        ),
    };

    format!(
        "You are a nutritionist and product safety expert reviewing a {category} product.\n\
         \n\
         {task}\n\
         \n\
         Reply with a single JSON object and nothing else, using exactly this shape:\n\
         {RESPONSE_SHAPE}\n\
         \n\
         Rules:\n\
         - {coverage_rule}\n\
         - Sort \"results\" from the LEAST harmful ingredient to the MOST harmful one.\n\
         - \"risk\" must be exactly one of LOW, MEDIUM or HIGH.\n\
         - {product_name_hint}\n\
         - Be factual and concise.\n\
         - Do not wrap the JSON in markdown code fences.\n\
         - Do not add any text before or after the JSON object.\n",
        category = category.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::value_objects::InlineImage;

    fn text(ingredients: &str) -> AnalysisSource {
        AnalysisSource::Text {
            ingredients_text: ingredients.to_string(),
        }
    }

    #[test]
    fn text_prompt_is_deterministic() {
        let first = build_analysis_prompt(&text("Sugar, Salt, E621"), ProductCategory::Food);
        let second = build_analysis_prompt(&text("Sugar, Salt, E621"), ProductCategory::Food);

        assert_eq!(first, second);
    }

    #[test]
    fn text_prompt_embeds_ingredients_category_and_rules() {
        let prompt =
            build_analysis_prompt(&text("  Water, Glycerin \n"), ProductCategory::Cosmetics);

        assert!(prompt.contains("COSMETICS product"));
        assert!(prompt.contains("Ingredients:\nWater, Glycerin\n"));
        assert!(prompt.contains("\"warningsFor\""));
        assert!(prompt.contains("LEAST harmful"));
        assert!(prompt.contains("LOW, MEDIUM or HIGH"));
        assert!(prompt.contains("code fences"));
        assert!(prompt.contains("every ingredient from the list"));
    }

    #[test]
    fn category_changes_the_prompt() {
        let food = build_analysis_prompt(&text("Sugar"), ProductCategory::Food);
        let drink = build_analysis_prompt(&text("Sugar"), ProductCategory::Beverages);

        assert_ne!(food, drink);
    }

    #[test]
    fn image_prompt_does_not_depend_on_the_image_bytes() {
        let image = |data: Vec<u8>| {
            AnalysisSource::Image(InlineImage {
                mime_type: "image/png".to_string(),
                data,
            })
        };

        let first = build_analysis_prompt(&image(vec![1, 2, 3]), ProductCategory::Food);
        let second = build_analysis_prompt(&image(vec![9, 9]), ProductCategory::Food);

        assert_eq!(first, second);
        assert!(first.contains("every ingredient visible in the image"));
    }
}
