use crate::core::errors::SweepError;
use crate::records::keep_list::KeepListError;
use crate::route53::errors::Route53Error;
use crate::snapshot::errors::SnapshotError;

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    #[error("Hosted zone name must not be empty")]
    MissingZoneName,

    #[error("Target alias must not be empty")]
    MissingTargetAlias,

    #[error(transparent)]
    KeepListError {
        #[from]
        source: KeepListError,
    },

    #[error(transparent)]
    Route53Error {
        #[from]
        source: Route53Error,
    },

    #[error(transparent)]
    SnapshotError {
        #[from]
        source: SnapshotError,
    },
}

impl SweepError for CleanupError {
    fn error_code(&self) -> &'static str {
        match self {
            CleanupError::MissingZoneName => "MISSING_ZONE_NAME",
            CleanupError::MissingTargetAlias => "MISSING_TARGET_ALIAS",
            CleanupError::KeepListError { .. } => "KEEP_LIST_ERROR",
            CleanupError::Route53Error { .. } => "ROUTE53_ERROR",
            CleanupError::SnapshotError { .. } => "SNAPSHOT_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CleanupError::MissingZoneName | CleanupError::MissingTargetAlias => true,
            CleanupError::KeepListError { source } => source.is_user_error(),
            CleanupError::Route53Error { source } => source.is_user_error(),
            CleanupError::SnapshotError { source } => source.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CleanupError::MissingZoneName.error_code(), "MISSING_ZONE_NAME");
        assert_eq!(
            CleanupError::MissingTargetAlias.error_code(),
            "MISSING_TARGET_ALIAS"
        );
    }

    #[test]
    fn test_validation_errors_are_user_errors() {
        assert!(CleanupError::MissingZoneName.is_user_error());
        assert!(CleanupError::MissingTargetAlias.is_user_error());
    }

    #[test]
    fn test_wrapped_errors_delegate_user_flag() {
        let err = CleanupError::from(Route53Error::ZoneNotFound {
            zone: "example.com".to_string(),
        });
        assert!(err.is_user_error());
        assert_eq!(err.error_code(), "ROUTE53_ERROR");

        let err = CleanupError::from(Route53Error::ApiFailed {
            operation: "list_resource_record_sets",
            message: "throttled".to_string(),
        });
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_error_display_passes_through() {
        let err = CleanupError::from(Route53Error::ZoneNotFound {
            zone: "example.com".to_string(),
        });
        assert!(err.to_string().contains("example.com"));
    }
}
