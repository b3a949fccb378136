pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use errors::{RestoreError, SnapshotError};
pub use handler::restore_records;
pub use types::{RestoreSummary, Snapshot};
