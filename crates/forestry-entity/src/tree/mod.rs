//! Tree domain entities.

pub mod condition;
pub mod measurement;
pub mod model;

pub use condition::TreeCondition;
pub use measurement::Measurement;
pub use model::Tree;
