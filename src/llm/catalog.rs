use serde::Serialize;
use super::types::ProviderKind;

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub provider: ProviderKind,
}

pub static MODELS: &[ModelInfo] = &[
    ModelInfo { id: "gemini-2.0-flash", label: "Gemini Flash 2.0", provider: ProviderKind::Google },
    ModelInfo { id: "gemini-2.5-flash", label: "Gemini Flash 2.5", provider: ProviderKind::Google },
    ModelInfo { id: "gemini-pro", label: "Gemini Pro", provider: ProviderKind::Google },
    ModelInfo { id: "gpt-4.1", label: "GPT-4.1", provider: ProviderKind::OpenAi },
    ModelInfo { id: "gpt-4o", label: "GPT-4o", provider: ProviderKind::OpenAi },
    ModelInfo { id: "gpt-5-mini", label: "GPT-5-mini", provider: ProviderKind::OpenAi },
    ModelInfo { id: "gpt-5", label: "GPT-5", provider: ProviderKind::OpenAi },
    ModelInfo { id: "gpt-4", label: "GPT-4", provider: ProviderKind::OpenAi },
    ModelInfo { id: "gpt-4-turbo", label: "GPT-4 Turbo", provider: ProviderKind::OpenAi },
    ModelInfo { id: "gpt-3.5-turbo", label: "GPT-3.5 Turbo", provider: ProviderKind::OpenAi },
    ModelInfo { id: "claude-3-opus", label: "Claude 3 Opus", provider: ProviderKind::Anthropic },
    ModelInfo { id: "claude-3-sonnet", label: "Claude 3 Sonnet", provider: ProviderKind::Anthropic },
    ModelInfo { id: "claude-3-haiku", label: "Claude 3 Haiku", provider: ProviderKind::Anthropic },
];

/// Model families for ids not listed in `MODELS` (dated snapshots and the like).
pub static FAMILIES: &[(&str, ProviderKind)] = &[
    ("gpt", ProviderKind::OpenAi),
    ("claude", ProviderKind::Anthropic),
    ("gemini", ProviderKind::Google),
];

pub fn get_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}

pub fn provider_for_model(model: &str) -> Option<ProviderKind> {
    if let Some(info) = get_model(model) {
        return Some(info.provider);
    }
    FAMILIES
        .iter()
        .find(|(family, _)| model.starts_with(family))
        .map(|(_, kind)| *kind)
}
