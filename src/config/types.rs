use serde::{Deserialize, Serialize};

pub const DEFAULT_FAQ_PATH: &str = "../data/processed_qna.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ChatbenchConfig {
    pub server: Option<ServerConfig>,
    pub faq: Option<FaqConfig>,
    pub prompt: Option<PromptConfig>,
    pub providers: Option<ProvidersConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FaqConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptConfig {
    /// Text file with a `{faq_data}` placeholder.
    pub template_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProvidersConfig {
    pub openai: Option<ProviderEndpoint>,
    pub anthropic: Option<ProviderEndpoint>,
    pub google: Option<ProviderEndpoint>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderEndpoint {
    pub base_url: Option<String>,
    /// Fallback key for requests that carry none. `$NAME` reads the environment.
    pub api_key: Option<String>,
}

impl ChatbenchConfig {
    pub fn faq_path(&self) -> &str {
        self.faq.as_ref().map(|f| f.path.as_str()).unwrap_or(DEFAULT_FAQ_PATH)
    }

    pub fn cors_origin(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.cors_origin.as_deref())
            .unwrap_or(DEFAULT_CORS_ORIGIN)
    }
}
