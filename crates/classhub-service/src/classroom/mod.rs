//! Classrooms and the resources posted to them.

pub mod resource;
pub mod service;

pub use resource::{ClassResourceService, CreateClassResourceRequest};
pub use service::{ClassroomService, CreateClassroomRequest};
