//! User registration and role administration.

pub mod service;

pub use service::{CreateUserRequest, UpdateRoleRequest, UserCreation, UserService};
