//! # forestry-core
//!
//! Core crate for ForestInventory. Contains configuration schemas, the
//! unified error system, and log sanitization helpers.
//!
//! This crate has **no** internal dependencies on other ForestInventory
//! crates.

pub mod config;
pub mod error;
pub mod result;
pub mod sanitize;

pub use error::AppError;
pub use result::AppResult;
