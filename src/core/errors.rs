use std::error::Error;

/// Base trait for all application errors
pub trait SweepError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SweepResult<T> = Result<T, Box<dyn SweepError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "AWS access key id not set: pass --aws-access-key-id or set the AWS_ACCESS_KEY_ID environment variable"
    )]
    MissingAccessKeyId,

    #[error(
        "AWS secret access key not set: pass --aws-secret-access-key or set the AWS_SECRET_ACCESS_KEY environment variable"
    )]
    MissingSecretAccessKey,

    #[error("Could not determine home directory")]
    NoHomeDirectory,
}

impl SweepError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingAccessKeyId => "MISSING_ACCESS_KEY_ID",
            ConfigError::MissingSecretAccessKey => "MISSING_SECRET_ACCESS_KEY",
            ConfigError::NoHomeDirectory => "NO_HOME_DIRECTORY",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingAccessKeyId | ConfigError::MissingSecretAccessKey
        )
    }
}
