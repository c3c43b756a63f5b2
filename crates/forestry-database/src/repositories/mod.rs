//! Concrete repository implementations, one per entity.

pub mod plot;
pub mod species;
pub mod sync_log;
pub mod tree;
pub mod user;
