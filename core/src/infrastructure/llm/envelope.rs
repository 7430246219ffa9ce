use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::common::entities::app_errors::CoreError;

/// Outer JSON returned by a provider. Decoded as one of the known shapes so
/// that anything else fails in a single place.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProviderEnvelope {
    Candidates { candidates: Vec<Candidate> },
    Choices { choices: Vec<Choice> },
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ProviderEnvelope {
    fn into_text(self) -> Option<String> {
        let text = match self {
            ProviderEnvelope::Candidates { candidates } => {
                let text: String = candidates
                    .into_iter()
                    .next()?
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect();
                Some(text)
            }
            ProviderEnvelope::Choices { choices } => choices.into_iter().next()?.message.content,
        };

        text.filter(|text| !text.trim().is_empty())
    }
}

/// Non-2xx statuses become [`CoreError::ProviderError`]; a 2xx body goes
/// through [`extract_text`].
pub fn read_provider_body(status: StatusCode, body: &str) -> Result<String, CoreError> {
    if !status.is_success() {
        error!("Provider returned {}: {}", status, body);
        return Err(CoreError::ProviderError(format!(
            "provider returned {status}"
        )));
    }

    debug!(bytes = body.len(), "received provider response");

    extract_text(body)
}

/// Maps a failure to reach the provider or to read its body. The url is
/// stripped since it may carry an api key.
pub fn transport_error(e: reqwest::Error) -> CoreError {
    let e = e.without_url();
    error!("Provider request failed: {}", e);
    CoreError::ProviderError(format!("request failed: {}", e))
}

/// Pulls the generated text out of a provider response body.
pub fn extract_text(body: &str) -> Result<String, CoreError> {
    let envelope: ProviderEnvelope = serde_json::from_str(body).map_err(|e| {
        error!("Unrecognised provider envelope: {}", e);
        CoreError::MalformedProviderResponse(
            "expected a candidates or choices array".to_string(),
        )
    })?;

    envelope.into_text().ok_or_else(|| {
        error!("Provider envelope carried no text");
        CoreError::MalformedProviderResponse("no text in provider response".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(body: &str) {
        match extract_text(body) {
            Err(CoreError::MalformedProviderResponse(_)) => {}
            other => panic!("expected MalformedProviderResponse, got {other:?}"),
        }
    }

    #[test]
    fn reads_candidates_envelope() {
        let body = r#"{
            "candidates": [
                {"content": {
                    "role": "model",
                    "parts": [{"text": "{\"results\""}, {"text": ": []}"}]
                }},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12}
        }"#;

        assert_eq!(extract_text(body).unwrap(), r#"{"results": []}"#);
    }

    #[test]
    fn reads_choices_envelope() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "```json\n{}\n```"}}
            ]
        }"#;

        assert_eq!(extract_text(body).unwrap(), "```json\n{}\n```");
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert_malformed(r#"{"output": "hello"}"#);
        assert_malformed(r#"{"error": {"message": "quota exceeded"}}"#);
        assert_malformed("not json at all");
    }

    #[test]
    fn error_statuses_are_provider_errors() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let body = r#"{"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}"#;

            assert_eq!(
                read_provider_body(status, body),
                Err(CoreError::ProviderError(format!("provider returned {status}")))
            );
        }
    }

    #[test]
    fn successful_status_with_unknown_shape_is_malformed() {
        match read_provider_body(StatusCode::OK, r#"{"output": "hello"}"#) {
            Err(CoreError::MalformedProviderResponse(_)) => {}
            other => panic!("expected MalformedProviderResponse, got {other:?}"),
        }
    }

    #[test]
    fn successful_status_yields_the_text() {
        let body = r#"{"choices": [{"message": {"content": "{}"}}]}"#;

        assert_eq!(read_provider_body(StatusCode::OK, body).unwrap(), "{}");
    }

    #[test]
    fn rejects_envelopes_without_text() {
        assert_malformed(r#"{"candidates": []}"#);
        assert_malformed(r#"{"candidates": [{"content": {"parts": []}}]}"#);
        assert_malformed(r#"{"choices": [{"message": {"role": "assistant"}}]}"#);
    }
}
