use std::path::Path;
use crate::errors::ChatbenchError;
use super::credentials::resolve_credential;
use super::types::{ChatbenchConfig, ProviderEndpoint};
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<ChatbenchConfig, ChatbenchError> {
    if !path.exists() {
        return Err(ChatbenchError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ChatbenchError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let mut config: ChatbenchConfig = serde_yaml::from_str(&content)?;

    validate_config(&config)?;
    resolve_provider_keys(&mut config);

    Ok(config)
}

fn validate_config(config: &ChatbenchConfig) -> Result<(), ChatbenchError> {
    if let Some(faq) = &config.faq {
        if !faq.path.ends_with(".json") {
            return Err(ChatbenchError::Config(format!(
                "FAQ path must point to a .json file: {}",
                faq.path
            )));
        }
    }

    if let Some(providers) = &config.providers {
        let endpoints = [
            ("openai", &providers.openai),
            ("anthropic", &providers.anthropic),
            ("google", &providers.google),
        ];
        for (name, endpoint) in endpoints {
            let Some(base_url) = endpoint.as_ref().and_then(|e| e.base_url.as_deref()) else {
                continue;
            };
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(ChatbenchError::Config(format!(
                    "{} base_url must be an http(s) URL: {}",
                    name, base_url
                )));
            }
        }
    }

    Ok(())
}

fn resolve_provider_keys(config: &mut ChatbenchConfig) {
    let Some(providers) = config.providers.as_mut() else {
        return;
    };
    for endpoint in [&mut providers.openai, &mut providers.anthropic, &mut providers.google]
        .into_iter()
        .flatten()
    {
        resolve_endpoint_key(endpoint);
    }
}

fn resolve_endpoint_key(endpoint: &mut ProviderEndpoint) {
    if let Some(raw) = endpoint.api_key.take() {
        let resolved = resolve_credential(&raw);
        if resolved.starts_with('$') {
            warn!(reference = %raw, "Provider key references an unset environment variable");
            return;
        }
        if !resolved.is_empty() {
            endpoint.api_key = Some(resolved);
        }
    }
}
