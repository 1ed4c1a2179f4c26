//! # classhub-auth
//!
//! Authentication and authorization for ClassHub.
//!
//! ## Modules
//!
//! - `jwt`: identity token signing and verification
//! - `principal`: the verified identity attached to a request
//! - `rbac`: role lookups against the user store

pub mod jwt;
pub mod principal;
pub mod rbac;

pub use jwt::{Claims, EncodingError, TokenCodec, VerificationError};
pub use principal::Principal;
pub use rbac::RoleGate;
