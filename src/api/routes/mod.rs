pub mod root;
pub mod faq;
pub mod prompt;
pub mod chat;
pub mod batch;
pub mod cost;
pub mod ws;
