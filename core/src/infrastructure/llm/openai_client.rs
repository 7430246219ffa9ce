use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::{ports::LLMClient, value_objects::InlineImage},
    },
    infrastructure::llm::envelope::{read_provider_body, transport_error},
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for any endpoint speaking the OpenAI chat completions protocol,
/// including a local Ollama.
#[derive(Debug, Clone)]
pub struct OpenAiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

impl OpenAiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: Client::new(),
        }
    }

    fn build_request(&self, prompt: String, image: Option<InlineImage>) -> ChatRequest {
        let mut content = vec![ContentPart::Text { text: prompt }];

        if let Some(image) = image {
            content.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: format!(
                        "data:{};base64,{}",
                        image.mime_type,
                        general_purpose::STANDARD.encode(&image.data)
                    ),
                },
            });
        }

        ChatRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            stream: false,
        }
    }
}

impl LLMClient for OpenAiLLMClient {
    async fn invoke(
        &self,
        prompt: String,
        image: Option<InlineImage>,
    ) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut builder = self
            .client
            .post(&url)
            .json(&self.build_request(prompt, image));

        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        debug!(model = %self.model_name, "calling chat completions");

        let response = builder.send().await.map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        read_provider_body(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_is_sent_as_data_url_part() {
        let client = OpenAiLLMClient::new(String::new(), "llava".to_string(), None);
        let request = client.build_request(
            "read".to_string(),
            Some(InlineImage {
                mime_type: "image/jpeg".to_string(),
                data: b"jpg".to_vec(),
            }),
        );
        let json = serde_json::to_value(&request).unwrap();
        let content = &json["messages"][0]["content"];

        assert_eq!(json["model"], "llava");
        assert_eq!(json["stream"], false);
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[1]["type"], "image_url");
        assert_eq!(content[1]["image_url"]["url"], "data:image/jpeg;base64,anBn");
    }

    #[test]
    fn defaults_to_public_endpoint() {
        let client = OpenAiLLMClient::new("sk".to_string(), "gpt-4o-mini".to_string(), None);

        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_provider_error() {
        let client = OpenAiLLMClient::new(
            String::new(),
            "llava".to_string(),
            Some("http://127.0.0.1:1/v1".to_string()),
        );

        let err = client.invoke("read".to_string(), None).await.unwrap_err();

        assert!(matches!(err, CoreError::ProviderError(_)));
    }
}
