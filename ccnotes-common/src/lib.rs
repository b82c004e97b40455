//! # CCNotes Common Library
//!
//! Shared code for the CCNotes content manager:
//! - Entity models (notes, series, speakers)
//! - Database initialization and schema
//! - Configuration loading and root folder resolution
//! - Error types
//! - Time helpers

pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
