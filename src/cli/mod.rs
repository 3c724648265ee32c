pub mod commands;
pub mod serve;
pub mod fallback;
pub mod estimate;

pub use commands::{Cli, Commands};
