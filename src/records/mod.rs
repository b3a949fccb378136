pub mod keep_list;
pub mod types;

// Re-export commonly used types
pub use keep_list::{KeepList, KeepListError};
pub use types::{DnsRecord, FailedRecord, RecordTarget, RecordType, normalize_name};
