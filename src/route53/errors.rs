use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::core::errors::SweepError;

#[derive(Debug, thiserror::Error)]
pub enum Route53Error {
    #[error("AWS rejected the credentials: {message}")]
    AuthFailed { message: String },

    #[error("Hosted zone '{zone}' not found")]
    ZoneNotFound { zone: String },

    #[error("Record '{name}' has unsupported type '{record_type}'")]
    UnsupportedRecord { name: String, record_type: String },

    #[error("Route 53 call '{operation}' failed: {message}")]
    ApiFailed {
        operation: &'static str,
        message: String,
    },

    #[error("Failed to build Route 53 request: {source}")]
    RequestBuild {
        #[from]
        source: aws_sdk_route53::error::BuildError,
    },
}

impl SweepError for Route53Error {
    fn error_code(&self) -> &'static str {
        match self {
            Route53Error::AuthFailed { .. } => "AWS_AUTH_FAILED",
            Route53Error::ZoneNotFound { .. } => "ZONE_NOT_FOUND",
            Route53Error::UnsupportedRecord { .. } => "UNSUPPORTED_RECORD",
            Route53Error::ApiFailed { .. } => "ROUTE53_API_FAILED",
            Route53Error::RequestBuild { .. } => "ROUTE53_REQUEST_BUILD_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            Route53Error::AuthFailed { .. } | Route53Error::ZoneNotFound { .. }
        )
    }
}

/// Error codes AWS returns when the request was signed with bad, expired or
/// insufficient credentials.
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "ExpiredToken",
    "InvalidClientTokenId",
    "InvalidSignatureException",
    "MissingAuthenticationToken",
    "SignatureDoesNotMatch",
    "UnrecognizedClientException",
];

/// Classify an SDK failure into this module's error type.
///
/// `zone` is what the caller was working on (zone name or id); it only ends
/// up in the error when AWS reports the zone itself missing.
pub(crate) fn map_sdk_error<E, R>(
    operation: &'static str,
    zone: &str,
    err: SdkError<E, R>,
) -> Route53Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_owned);
    let message = format!("{}", DisplayErrorContext(&err));

    match code.as_deref() {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => Route53Error::AuthFailed { message },
        Some("NoSuchHostedZone") => Route53Error::ZoneNotFound {
            zone: zone.to_string(),
        },
        _ => Route53Error::ApiFailed { operation, message },
    }
}
