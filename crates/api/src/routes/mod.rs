//! HTTP route handlers.

pub mod health;
pub mod inference;
pub mod metrics;
