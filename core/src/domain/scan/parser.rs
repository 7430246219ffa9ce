use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::entities::{AiAnalysisResult, UNKNOWN_PRODUCT_NAME},
};

const FENCE: &str = "```";

/// Top-level document the model is asked to produce. Only `results` is
/// mandatory; everything else degrades to a default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisDocument {
    #[serde(default)]
    product_name: Option<String>,
    results: Vec<Value>,
    #[serde(default)]
    safety_score: Option<f64>,
    #[serde(default)]
    overall_assessment: Option<String>,
    #[serde(default)]
    warnings_for: Option<Vec<String>>,
}

/// Removes an opening fence (with or without a language tag) and a closing
/// fence around the payload, plus surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim().trim_start_matches('\u{feff}').trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
            .unwrap_or(rest.len());
        text = rest[tag_len..].trim_start();
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest.trim_end();
    }

    text.trim()
}

/// Turns the model's reply text into an [`AiAnalysisResult`].
///
/// Either the document shape decodes or the call fails with
/// [`CoreError::InvalidAnalysisJson`] carrying the cleaned text. Entries of
/// `results` are only required to be JSON values here.
pub fn parse_analysis(raw: &str) -> Result<AiAnalysisResult, CoreError> {
    let cleaned = strip_code_fences(raw);

    let document: AnalysisDocument = serde_json::from_str(cleaned).map_err(|e| {
        error!("Failed to decode analysis JSON: {}", e);
        invalid(cleaned, e.to_string())
    })?;

    let safety_score = match document.safety_score {
        None => None,
        Some(score) if (1.0..=10.0).contains(&score) => Some(score.round() as i32),
        Some(score) => {
            error!("Safety score out of range: {}", score);
            return Err(invalid(
                cleaned,
                format!("safetyScore must be between 1 and 10, got {score}"),
            ));
        }
    };

    let product_name = document
        .product_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string());

    debug!(
        product_name = %product_name,
        entries = document.results.len(),
        "decoded analysis document"
    );

    Ok(AiAnalysisResult {
        product_name,
        results: document.results,
        safety_score,
        overall_assessment: document
            .overall_assessment
            .filter(|assessment| !assessment.trim().is_empty()),
        warnings_for: document.warnings_for.unwrap_or_default(),
    })
}

fn invalid(cleaned: &str, reason: String) -> CoreError {
    CoreError::InvalidAnalysisJson {
        raw: cleaned.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "productName": "Cola Zero",
        "results": [
            {
                "ingredientName": "Carbonated Water",
                "risk": "LOW",
                "severity": "Minimal",
                "explanation": "Harmless",
                "description": "Water with dissolved CO2",
                "category": "base",
                "sideEffects": []
            },
            {
                "ingredientName": "Aspartame",
                "risk": "HIGH",
                "severity": "Moderate",
                "explanation": "Artificial sweetener",
                "description": "Methyl ester dipeptide",
                "category": "sweetener",
                "sideEffects": ["headaches"]
            }
        ],
        "safetyScore": 4,
        "overallAssessment": "Contains artificial sweeteners.",
        "warningsFor": ["people with phenylketonuria"]
    }"#;

    fn assert_invalid(raw: &str) {
        match parse_analysis(raw) {
            Err(CoreError::InvalidAnalysisJson { .. }) => {}
            other => panic!("expected InvalidAnalysisJson, got {other:?}"),
        }
    }

    #[test]
    fn fenced_and_bare_bodies_parse_identically() {
        let bare = parse_analysis(BODY).unwrap();
        let tagged = parse_analysis(&format!("```json\n{BODY}\n```")).unwrap();
        let untagged = parse_analysis(&format!("```\n{BODY}\n```")).unwrap();
        let padded = parse_analysis(&format!("\n\n  ```JSON {BODY}```  \n")).unwrap();

        assert_eq!(bare, tagged);
        assert_eq!(bare, untagged);
        assert_eq!(bare, padded);
        assert_eq!(bare.product_name, "Cola Zero");
        assert_eq!(bare.results.len(), 2);
        assert_eq!(bare.safety_score, Some(4));
        assert_eq!(bare.warnings_for, vec!["people with phenylketonuria"]);
    }

    #[test]
    fn strip_code_fences_leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_invalid("");
        assert_invalid("```json\n```");
    }

    #[test]
    fn prose_is_invalid() {
        assert_invalid("I'm sorry, I cannot read this label.");
    }

    #[test]
    fn missing_results_is_invalid() {
        assert_invalid(r#"{"productName": "Soap", "safetyScore": 7}"#);
    }

    #[test]
    fn invalid_error_carries_cleaned_text() {
        let err = parse_analysis("```json\nnot json\n```").unwrap_err();

        match err {
            CoreError::InvalidAnalysisJson { raw, .. } => assert_eq!(raw, "not json"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn out_of_range_safety_score_is_invalid() {
        assert_invalid(r#"{"results": [], "safetyScore": 42}"#);
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let parsed = parse_analysis(r#"{"productName": "  ", "results": []}"#).unwrap();

        assert_eq!(parsed.product_name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(parsed.safety_score, None);
        assert_eq!(parsed.overall_assessment, None);
        assert!(parsed.warnings_for.is_empty());
    }

    #[test]
    fn incomplete_entries_survive_decoding() {
        let parsed =
            parse_analysis(r#"{"results": [{"risk": "LOW"}, {"ingredientName": "Salt"}]}"#)
                .unwrap();

        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].get("ingredientName"), None);
        assert_eq!(parsed.results[1].get("risk"), None);
    }

    #[test]
    fn wrong_typed_entries_do_not_fail_the_document() {
        let parsed = parse_analysis(
            r#"{"results": [
                {"ingredientName": "Sugar", "risk": "HIGH"},
                {"ingredientName": "Pectin", "risk": "LOW", "sideEffects": "none"},
                "Citric Acid",
                {"ingredientName": "Water", "risk": 2}
            ]}"#,
        )
        .unwrap();

        assert_eq!(parsed.results.len(), 4);
    }

    #[test]
    fn non_array_results_is_invalid() {
        assert_invalid(r#"{"results": "Sugar, Water"}"#);
    }
}
