pub mod api;
pub mod batch;
pub mod chat;
pub mod cli;
pub mod config;
pub mod cost;
pub mod errors;
pub mod faq;
pub mod history;
pub mod llm;
pub mod prompt;
pub mod utils;
