//! # classhub-entity
//!
//! Domain entity models for ClassHub. Every struct in this crate
//! represents a database table row or the input for creating one.
//! Row entities derive `sqlx::FromRow`; entities that accept partial
//! updates also publish an [`schema::EntitySchema`] describing their
//! updatable fields and the update policy applied to them.

pub mod classroom;
pub mod course;
pub mod resource;
pub mod schema;
pub mod user;

pub use classroom::{ClassResource, Classroom, NewClassResource, NewClassroom};
pub use course::{Course, NewCourse};
pub use resource::{NewResource, Resource};
pub use schema::{EntitySchema, FieldKind, FieldSpec, UpdatePolicy};
pub use user::{NewUser, User, UserRole};
