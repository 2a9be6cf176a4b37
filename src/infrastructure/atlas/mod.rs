//! Atlas service client
//!
//! Builds authenticated JSON requests for the Atlas credential service and
//! sends them through an injected [`HttpTransport`](crate::domain::ports::HttpTransport).

pub mod client;
pub mod endpoints;

pub use client::AtlasClient;
pub use endpoints::{Endpoint, ISSUE_CREDENTIAL_PATH};
