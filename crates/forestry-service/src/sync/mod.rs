//! Mobile synchronization log use cases.

pub mod service;

pub use service::SyncLogService;
