//! Course resources (shared study links).

pub mod model;

pub use model::{NewResource, Resource};
