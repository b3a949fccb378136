pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use errors::CleanupError;
pub use handler::run_cleanup;
pub use types::{CleanupRequest, CleanupSummary};
