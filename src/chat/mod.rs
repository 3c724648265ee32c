pub mod models;
pub mod service;

pub use models::{ChatRequest, TestResult, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use service::ChatService;
