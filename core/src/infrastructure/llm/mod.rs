pub mod envelope;
pub mod gemini_client;
pub mod openai_client;

use tracing::info;

use crate::domain::{
    common::{LLMConfig, LLMProviderKind, entities::app_errors::CoreError},
    scan::{ports::LLMClient, value_objects::InlineImage},
};

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiLLMClient;

/// Provider selected at startup from configuration.
#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini(GeminiLLMClient),
    OpenAi(OpenAiLLMClient),
}

impl From<LLMConfig> for LLMProvider {
    fn from(config: LLMConfig) -> Self {
        info!(provider = ?config.provider, model = %config.model, "configuring LLM provider");

        match config.provider {
            LLMProviderKind::Gemini => LLMProvider::Gemini(GeminiLLMClient::new(
                config.api_key,
                config.model,
                config.base_url,
            )),
            LLMProviderKind::OpenAi => LLMProvider::OpenAi(OpenAiLLMClient::new(
                config.api_key,
                config.model,
                config.base_url,
            )),
        }
    }
}

impl LLMClient for LLMProvider {
    async fn invoke(
        &self,
        prompt: String,
        image: Option<InlineImage>,
    ) -> Result<String, CoreError> {
        match self {
            LLMProvider::Gemini(client) => client.invoke(prompt, image).await,
            LLMProvider::OpenAi(client) => client.invoke(prompt, image).await,
        }
    }
}
