//! # classhub-database
//!
//! Store contracts for every catalog entity, the partial update builder,
//! PostgreSQL repositories implementing those contracts, and an in-memory
//! store with the same semantics (uniqueness, references, cascades).
//!
//! Every statement issued against PostgreSQL is parameterized; request
//! values never appear in statement text.

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;
pub mod update;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{
    ClassResourceStore, ClassroomStore, CourseStore, ResourceStore, RoleStore, Stores, UserStore,
};
pub use update::{FieldValue, PartialUpdate};
