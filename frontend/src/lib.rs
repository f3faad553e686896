//! Browser-side access layer for the HealthSmart backend.
//!
//! [`ApiClient`] exposes every backend operation as an async method returning
//! an [`shared::ApiResponse`]. Depending on [`ClientConfig`] it talks to the
//! real server over HTTP or to an in-browser simulation.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod mock;

pub use api::ApiClient;
pub use config::{ApiMode, ClientConfig};
