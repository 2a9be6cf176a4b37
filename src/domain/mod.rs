//! Domain layer for the Atlas client
//!
//! Error types, configuration and payload models, and the transport port.

pub mod error;
pub mod models;
pub mod ports;

pub use error::AtlasError;
