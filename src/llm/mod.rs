pub mod provider;
pub mod anthropic;
pub mod openai;
pub mod gemini;
pub mod router;
pub mod types;
pub mod catalog;
pub mod tokens;

pub use provider::LLMProvider;
pub use router::ProviderRouter;
pub use types::{Completion, CompletionParams, ProviderKind};
