//! Course catalog management.

pub mod service;

pub use service::{CourseService, CourseUpdate, CreateCourseRequest};
