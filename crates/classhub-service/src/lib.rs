//! # classhub-service
//!
//! Business logic for the ClassHub catalog. Every write goes through the
//! mutation guard in [`guard`]: required fields, then field formats, then
//! referenced-entity existence, then the store write, whose constraint
//! failures are mapped to caller-facing errors.
//!
//! Services follow constructor injection; store handles are provided at
//! construction time as `Arc<dyn ...>` references.

pub mod classroom;
pub mod course;
pub mod guard;
pub mod resource;
pub mod user;

pub use classroom::{ClassResourceService, ClassroomService};
pub use course::CourseService;
pub use resource::ResourceService;
pub use user::UserService;
