//! Metrics module for the Quill API service.

pub mod http;
pub mod setup;

pub use setup::init_metrics;
