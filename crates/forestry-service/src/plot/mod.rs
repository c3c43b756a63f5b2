//! Sample plot use cases.

pub mod service;

pub use service::PlotService;
