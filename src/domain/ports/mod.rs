//! Port trait definitions (Hexagonal Architecture)
//!
//! - `HttpTransport`: delivery of built HTTP requests
//!
//! The client depends on this trait rather than on a process-wide default
//! HTTP client, so callers choose the transport and tests can substitute it.

pub mod http_transport;

pub use http_transport::HttpTransport;
