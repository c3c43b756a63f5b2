//! Sample plot domain entities.

pub mod model;

pub use model::Plot;
