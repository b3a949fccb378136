use std::path::PathBuf;

use crate::core::errors::SweepError;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Restore file not found at '{path}'")]
    NotFound { path: PathBuf },

    #[error("Restore file '{path}' is malformed: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Failed to serialize snapshot: {message}")]
    SerializeFailed { message: String },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl SweepError for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            SnapshotError::NotFound { .. } => "RESTORE_FILE_NOT_FOUND",
            SnapshotError::Malformed { .. } => "RESTORE_FILE_MALFORMED",
            SnapshotError::SerializeFailed { .. } => "SNAPSHOT_SERIALIZE_FAILED",
            SnapshotError::IoError { .. } => "SNAPSHOT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SnapshotError::NotFound { .. } | SnapshotError::Malformed { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("Snapshot could not be read: {source}")]
    SnapshotError {
        #[from]
        source: SnapshotError,
    },

    #[error("Route 53 operation failed: {source}")]
    Route53Error {
        #[from]
        source: crate::route53::errors::Route53Error,
    },
}

impl SweepError for RestoreError {
    fn error_code(&self) -> &'static str {
        match self {
            RestoreError::SnapshotError { .. } => "RESTORE_SNAPSHOT_ERROR",
            RestoreError::Route53Error { .. } => "RESTORE_ROUTE53_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, RestoreError::SnapshotError { .. })
    }
}
