//! # forestry-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all ForestInventory entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
