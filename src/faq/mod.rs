pub mod store;

pub use store::{count_entries, parse_upload, FaqData, FaqSnapshot, FaqStore};
