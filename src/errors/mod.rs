pub mod types;

pub use types::ChatbenchError;
