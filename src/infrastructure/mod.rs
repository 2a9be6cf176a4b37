//! Infrastructure layer module
//!
//! This module contains the adapters around the domain:
//! - Atlas HTTP client (reqwest)
//! - Configuration management (figment)
//! - Logging infrastructure (tracing-subscriber)

pub mod atlas;
pub mod config;
pub mod logging;
