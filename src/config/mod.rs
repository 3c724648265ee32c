pub mod parser;
pub mod types;
pub mod credentials;

pub use types::*;
pub use parser::parse_config;
