//! Course catalog entries.

pub mod model;

pub use model::{Course, NewCourse};
