//! Token codec failures.

use thiserror::Error;

use classhub_core::error::{AppError, ErrorKind};

/// Why a token could not be produced.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The payload has no non-empty `email`.
    #[error("claims have no subject email")]
    MissingSubject,
    /// The signing library rejected the payload.
    #[error("token signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Signature is valid but `exp` has passed.
    #[error("token expired")]
    Expired,
    /// Not a well-formed token, or the claims do not decode.
    #[error("token malformed")]
    Malformed,
    /// Signed with a different secret or algorithm.
    #[error("token signature invalid")]
    BadSignature,
}

impl From<&jsonwebtoken::errors::Error> for VerificationError {
    fn from(err: &jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind as JwtKind;
        match err.kind() {
            JwtKind::ExpiredSignature => Self::Expired,
            JwtKind::InvalidSignature | JwtKind::InvalidAlgorithm => Self::BadSignature,
            _ => Self::Malformed,
        }
    }
}

impl From<EncodingError> for AppError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::MissingSubject => AppError::missing_fields(["email"]),
            EncodingError::Jwt(e) => {
                AppError::with_source(ErrorKind::Internal, "Failed to sign token", e)
            }
        }
    }
}

/// Every verification failure surfaces as the same forbidden response.
impl From<VerificationError> for AppError {
    fn from(_: VerificationError) -> Self {
        AppError::forbidden("forbidden access")
    }
}
