//! Role-based access control backed by the user store.

pub mod gate;

pub use gate::RoleGate;
