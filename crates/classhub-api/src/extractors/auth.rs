//! `AuthUser` extractor: reads the principal attached by the authentication gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use classhub_auth::Principal;
use classhub_core::error::AppError;

use crate::error::ApiError;

/// The verified caller of the current request.
///
/// Only present on routes behind the authentication gate; anywhere else the
/// extractor fails closed with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError(AppError::unauthenticated("unauthorized access")))
    }
}
