//! Data transfer objects for API responses.
//!
//! Request bodies are the service-layer request types, deserialized
//! directly by handlers.

pub mod response;
