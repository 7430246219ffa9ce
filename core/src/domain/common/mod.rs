pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriscanConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LLMProviderKind {
    Gemini,
    OpenAi,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProviderKind,
    pub api_key: String,
    pub model: String,
    /// Overrides the provider's default endpoint root.
    pub base_url: Option<String>,
}

