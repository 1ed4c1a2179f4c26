//! # classhub-core
//!
//! Core crate for ClassHub. Contains the configuration schemas and the
//! unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other ClassHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorDetail, ErrorKind};
pub use result::AppResult;
