//! # forestry-entity
//!
//! Domain entity models for ForestInventory. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod geo;
pub mod plot;
pub mod species;
pub mod sync;
pub mod tree;
pub mod user;
