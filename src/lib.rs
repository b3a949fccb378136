pub mod cleanup;
pub mod cli;
pub mod core;
pub mod records;
pub mod route53;
pub mod snapshot;

pub use crate::cli::app::build_cli;
pub use crate::cli::commands::run_command;
pub use crate::core::logging::init_logging;
