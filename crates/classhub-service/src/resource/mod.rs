//! Study links attached to courses.

pub mod service;

pub use service::{CreateResourceRequest, ResourceService};
