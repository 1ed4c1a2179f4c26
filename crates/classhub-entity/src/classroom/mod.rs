//! Classrooms (course sections) and the resources posted to them.

pub mod model;
pub mod resource;

pub use model::{Classroom, NewClassroom};
pub use resource::{ClassResource, NewClassResource};
