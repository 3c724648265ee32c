pub mod runner;
pub mod summary;

pub use runner::{run_batch, ApiKeyConfig, BatchOutcome, BatchReport, BatchRequest};
pub use summary::{summarize, BatchSummary};
