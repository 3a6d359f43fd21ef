//! HTTP handlers.

pub mod health;
pub mod info;
pub mod invalidate;
pub mod metrics;
pub mod posts;
