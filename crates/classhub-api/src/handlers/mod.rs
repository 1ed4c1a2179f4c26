//! HTTP request handlers organized by domain.

pub mod auth;
pub mod class_resources;
pub mod classroom;
pub mod courses;
pub mod health;
pub mod resources;
pub mod users;
