//! Transport port for sending built requests.

use async_trait::async_trait;
use reqwest::{Request, Response};
use std::sync::Arc;

/// Sends fully built HTTP requests
///
/// The Atlas client builds every request itself and hands it to a transport
/// for delivery. Connection pooling, TLS, timeouts and proxies are the
/// transport's business. Implementations must be safe to share between
/// tasks; the client never mutates them.
///
/// `reqwest::Client` implements this trait, so a configured reqwest client
/// can be injected directly. Test doubles can record requests and forward
/// them, or fail them, as needed.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Deliver `request` and return the response once headers arrive
    ///
    /// Non-2xx statuses are returned as `Ok`.
    async fn execute(&self, request: Request) -> reqwest::Result<Response>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        Self::execute(self, request).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        (**self).execute(request).await
    }
}
