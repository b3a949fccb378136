pub mod client;
pub mod errors;
pub mod handler;
pub mod types;

// Re-export commonly used types
pub use errors::Route53Error;
pub use types::HostedZone;
