//! Role checks for an authenticated principal.

use std::sync::Arc;

use tracing::{debug, error};

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_database::RoleStore;
use classhub_entity::UserRole;

use crate::principal::Principal;

/// Answers whether a principal holds one of a set of roles.
#[derive(Debug, Clone)]
pub struct RoleGate {
    roles: Arc<dyn RoleStore>,
}

impl RoleGate {
    /// Creates a gate over the given role store.
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Whether the subject holds any role in `required`.
    ///
    /// `subject` is the identity named by the request, if any; it must match
    /// the principal or the call fails with `Forbidden` before the store is
    /// consulted. A store failure is returned as-is and never read as
    /// "no role".
    pub async fn has_role(
        &self,
        principal: &Principal,
        subject: Option<&str>,
        required: &[UserRole],
    ) -> AppResult<bool> {
        if let Some(subject) = subject.filter(|s| !principal.is(s)) {
            debug!(
                principal = %principal.email,
                subject = %subject,
                "Role check rejected: subject mismatch"
            );
            return Err(AppError::forbidden("forbidden access"));
        }

        let role = self.roles.find_role(&principal.email).await.map_err(|e| {
            error!(email = %principal.email, error = %e, "Role lookup failed");
            e
        })?;

        Ok(role.is_some_and(|r| required.contains(&r)))
    }

    /// Like [`has_role`](Self::has_role) for the principal itself, failing
    /// with `Forbidden` when the answer is no.
    pub async fn require_role(&self, principal: &Principal, required: &[UserRole]) -> AppResult<()> {
        if self.has_role(principal, None, required).await? {
            Ok(())
        } else {
            debug!(principal = %principal.email, ?required, "Role check rejected");
            Err(AppError::forbidden("forbidden access"))
        }
    }
}
