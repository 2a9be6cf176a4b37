//! The Atlas HTTP client.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Body, Request, Response};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

use super::endpoints::Endpoint;
use crate::domain::error::AtlasError;
use crate::domain::models::commons::{AuditTrailQuery, MetricsQuery};
use crate::domain::models::config::{redact_api_key, Config};
use crate::domain::ports::HttpTransport;

/// Client for the Atlas credential service
///
/// Holds the base URL, an optional API key, and the transport used to
/// deliver requests. Every operation builds one request, sends it once, and
/// returns the raw [`Response`] whatever its status code. Response bodies
/// are never read or interpreted here.
///
/// Configuration is read-only after construction, so a client can be shared
/// across tasks (behind an `Arc` or by cloning) as long as its transport
/// can.
///
/// # Example
/// ```no_run
/// use atlas::infrastructure::atlas::AtlasClient;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AtlasClient::new("https://atlas.example.com", Some("secret123".to_string()));
///
/// let response = client
///     .issue_credential(Some(&json!({"subject": "alice"})))
///     .await?;
///
/// if !response.status().is_success() {
///     eprintln!("issuance rejected: {}", response.text().await?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AtlasClient<T = reqwest::Client> {
    base_url: String,
    api_key: Option<String>,
    transport: T,
}

impl AtlasClient<reqwest::Client> {
    /// Create a client backed by a default `reqwest::Client`
    ///
    /// No validation happens here: a malformed base URL is reported by the
    /// first operation as a construction error.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_transport(base_url, api_key, reqwest::Client::new())
    }

    /// Create a client from loaded configuration
    ///
    /// `timeout_secs`, when set, becomes the reqwest transport's request
    /// timeout. The client itself never enforces one.
    pub fn from_config(config: &Config) -> Result<Self, AtlasError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let transport = builder.build().map_err(AtlasError::ClientBuild)?;

        Ok(Self::with_transport(
            config.base_url.clone(),
            config.api_key.clone(),
            transport,
        ))
    }
}

impl<T> AtlasClient<T> {
    /// Create a client that sends requests through `transport`
    pub fn with_transport(base_url: impl Into<String>, api_key: Option<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            transport,
        }
    }

    /// Base URL the endpoint paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests will carry an `Authorization` header
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// The injected transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `endpoint` without sending it
    ///
    /// The request always carries `Content-Type: application/json`. It
    /// carries `Authorization: Bearer <api_key>` only when the API key is
    /// non-empty. The body is the JSON encoding of `payload`, or absent when
    /// `payload` is `None`.
    pub fn build_request<P>(
        &self,
        endpoint: &Endpoint<'_>,
        payload: Option<&P>,
    ) -> Result<Request, AtlasError>
    where
        P: Serialize + ?Sized,
    {
        let url = endpoint.url(&self.base_url)?;
        let body = payload.map(serde_json::to_vec).transpose()?;

        let mut request = Request::new(endpoint.method(), url);
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(authorization) = self.authorization()? {
            headers.insert(AUTHORIZATION, authorization);
        }
        if let Some(body) = body {
            *request.body_mut() = Some(Body::from(body));
        }

        Ok(request)
    }

    /// Build the request [`issue_credential`](Self::issue_credential) would send
    pub fn build_issue_request<P>(&self, payload: Option<&P>) -> Result<Request, AtlasError>
    where
        P: Serialize + ?Sized,
    {
        self.build_request(&Endpoint::IssueCredential, payload)
    }

    fn authorization(&self) -> Result<Option<HeaderValue>, AtlasError> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => {
                let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                    .map_err(|_| AtlasError::InvalidApiKey)?;
                value.set_sensitive(true);
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }
}

impl<T: HttpTransport> AtlasClient<T> {
    /// Create a DID: `POST {base_url}/v1/rl-dids`
    pub async fn create_did<P>(&self, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::CreateDid, payload).await
    }

    /// Attach stewardship data to a DID: `PATCH {base_url}/v1/rl-dids/{did}/stewardship`
    pub async fn attach_stewardship<P>(
        &self,
        did: &str,
        payload: Option<&P>,
    ) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::AttachStewardship(did), payload).await
    }

    /// Issue a verifiable credential: `POST {base_url}/v1/vrc/issue`
    ///
    /// # Arguments
    /// * `payload` - Request body, JSON-encoded; `None` sends an empty body
    ///
    /// # Returns
    /// * `Ok(Response)` - Any HTTP response, including 4xx and 5xx
    /// * `Err(AtlasError)` - The request could not be built or delivered
    ///
    /// Each call sends exactly one request. Nothing is retried, so calling
    /// twice issues two credentials.
    pub async fn issue_credential<P>(&self, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::IssueCredential, payload).await
    }

    /// Verify a credential: `POST {base_url}/v1/vrc/verify`
    pub async fn verify_credential<P>(&self, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::VerifyCredential, payload).await
    }

    /// Fetch revocation status: `GET {base_url}/v1/vrc/{credential_id}/status`
    pub async fn credential_status(&self, credential_id: &str) -> Result<Response, AtlasError> {
        self.send(Endpoint::CredentialStatus(credential_id), None::<&()>)
            .await
    }

    /// Resolve a DID document: `GET {base_url}/v1/rl-dids/{did}`
    pub async fn resolve_did(&self, did: &str) -> Result<Response, AtlasError> {
        self.send(Endpoint::ResolveDid(did), None::<&()>).await
    }

    /// Register a sensor: `POST {base_url}/v1/oracle/sensors`
    pub async fn register_sensor<P>(&self, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::RegisterSensor, payload).await
    }

    /// Submit a measurement: `POST {base_url}/v1/oracle/sensors/{sensor_id}/measurements`
    pub async fn submit_measurement<P>(
        &self,
        sensor_id: &str,
        payload: Option<&P>,
    ) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::SubmitMeasurement(sensor_id), payload)
            .await
    }

    /// Aggregate measurements into a claim: `POST {base_url}/v1/oracle/aggregate`
    pub async fn aggregate_measurements<P>(
        &self,
        payload: Option<&P>,
    ) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::AggregateMeasurements, payload).await
    }

    /// Request an activation: `POST {base_url}/v1/rve/activations`
    pub async fn submit_activation<P>(&self, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::SubmitActivation, payload).await
    }

    /// Fetch an activation: `GET {base_url}/v1/rve/activations/{activation_id}`
    pub async fn activation_status(&self, activation_id: &str) -> Result<Response, AtlasError> {
        self.send(Endpoint::ActivationStatus(activation_id), None::<&()>)
            .await
    }

    /// Verify an activation and trigger its action: `POST {base_url}/v1/rve/verify-and-trigger`
    pub async fn verify_and_trigger<P>(&self, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.send(Endpoint::VerifyAndTrigger, payload).await
    }

    /// Read a commons metric: `GET {base_url}/v1/commons/metrics`
    pub async fn commons_metrics(&self, query: &MetricsQuery) -> Result<Response, AtlasError> {
        self.send(Endpoint::CommonsMetrics(query), None::<&()>).await
    }

    /// Read recent audit events: `GET {base_url}/v1/commons/audit-trail`
    pub async fn audit_trail(&self, query: &AuditTrailQuery) -> Result<Response, AtlasError> {
        self.send(Endpoint::AuditTrail(query), None::<&()>).await
    }

    /// Build, send once, and return the raw response
    #[instrument(skip_all, fields(operation = endpoint.name()))]
    async fn send<P>(&self, endpoint: Endpoint<'_>, payload: Option<&P>) -> Result<Response, AtlasError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let request = self.build_request(&endpoint, payload)?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated = request.headers().contains_key(AUTHORIZATION),
            "sending request"
        );

        let response = self.transport.execute(request).await?;

        debug!(status = %response.status(), "response received");

        Ok(response)
    }
}

impl<T> fmt::Debug for AtlasClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlasClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_deref().map(redact_api_key))
            .finish_non_exhaustive()
    }
}
