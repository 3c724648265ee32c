pub mod builder;
pub mod store;

pub use builder::{render, PromptTemplate, DEFAULT_TEMPLATE, FAQ_PLACEHOLDER};
pub use store::{PromptSnapshot, PromptStore};
