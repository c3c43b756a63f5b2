//! # forestry-service
//!
//! Business logic service layer for ForestInventory. Each service
//! orchestrates repositories and the auth building blocks to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod plot;
pub mod species;
pub mod sync;
pub mod tree;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use plot::PlotService;
pub use species::SpeciesService;
pub use sync::SyncLogService;
pub use tree::TreeService;
pub use user::UserService;
