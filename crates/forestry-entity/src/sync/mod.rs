//! Mobile synchronization log entities.

pub mod model;

pub use model::{SyncDirection, SyncLog};
