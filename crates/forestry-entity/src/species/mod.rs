//! Tree species domain entities.

pub mod model;

pub use model::Species;
