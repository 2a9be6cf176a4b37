//! Routes of the Atlas service and how their URLs are built.

use reqwest::Method;
use url::Url;

use crate::domain::error::AtlasError;
use crate::domain::models::commons::{AuditTrailQuery, MetricsQuery};

/// Path of the credential issuance endpoint, appended to the base URL
pub const ISSUE_CREDENTIAL_PATH: &str = "/v1/vrc/issue";

/// Remote operations exposed by the Atlas service
///
/// Borrowed string variants carry a path parameter, which is percent-encoded
/// as a single path segment when the URL is built. Query variants are
/// form-encoded into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `POST /v1/rl-dids`
    CreateDid,
    /// `PATCH /v1/rl-dids/{did}/stewardship`
    AttachStewardship(&'a str),
    /// `POST /v1/vrc/issue`
    IssueCredential,
    /// `POST /v1/vrc/verify`
    VerifyCredential,
    /// `GET /v1/vrc/{credential_id}/status`
    CredentialStatus(&'a str),
    /// `GET /v1/rl-dids/{did}`
    ResolveDid(&'a str),
    /// `POST /v1/oracle/sensors`
    RegisterSensor,
    /// `POST /v1/oracle/sensors/{sensor_id}/measurements`
    SubmitMeasurement(&'a str),
    /// `POST /v1/rve/activations`
    SubmitActivation,
    /// `GET /v1/rve/activations/{activation_id}`
    ActivationStatus(&'a str),
    /// `POST /v1/oracle/aggregate`
    AggregateMeasurements,
    /// `POST /v1/rve/verify-and-trigger`
    VerifyAndTrigger,
    /// `GET /v1/commons/metrics?metric=..&bbox=..&timeRange=..`
    CommonsMetrics(&'a MetricsQuery),
    /// `GET /v1/commons/audit-trail?since=..&limit=..`
    AuditTrail(&'a AuditTrailQuery),
}

impl Endpoint<'_> {
    /// HTTP method used by this operation
    pub fn method(&self) -> Method {
        match self {
            Self::CredentialStatus(_)
            | Self::ResolveDid(_)
            | Self::ActivationStatus(_)
            | Self::CommonsMetrics(_)
            | Self::AuditTrail(_) => Method::GET,
            Self::AttachStewardship(_) => Method::PATCH,
            _ => Method::POST,
        }
    }

    /// Short operation name used in tracing spans
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateDid => "create_did",
            Self::AttachStewardship(_) => "attach_stewardship",
            Self::IssueCredential => "issue_credential",
            Self::VerifyCredential => "verify_credential",
            Self::CredentialStatus(_) => "credential_status",
            Self::ResolveDid(_) => "resolve_did",
            Self::RegisterSensor => "register_sensor",
            Self::SubmitMeasurement(_) => "submit_measurement",
            Self::SubmitActivation => "submit_activation",
            Self::ActivationStatus(_) => "activation_status",
            Self::AggregateMeasurements => "aggregate_measurements",
            Self::VerifyAndTrigger => "verify_and_trigger",
            Self::CommonsMetrics(_) => "commons_metrics",
            Self::AuditTrail(_) => "audit_trail",
        }
    }

    /// Fixed path prefix, the path parameter, and the trailing segment
    const fn route(&self) -> (&'static str, Option<&str>, Option<&'static str>) {
        match *self {
            Self::CreateDid => ("/v1/rl-dids", None, None),
            Self::AttachStewardship(did) => ("/v1/rl-dids", Some(did), Some("stewardship")),
            Self::IssueCredential => (ISSUE_CREDENTIAL_PATH, None, None),
            Self::VerifyCredential => ("/v1/vrc/verify", None, None),
            Self::CredentialStatus(id) => ("/v1/vrc", Some(id), Some("status")),
            Self::ResolveDid(did) => ("/v1/rl-dids", Some(did), None),
            Self::RegisterSensor => ("/v1/oracle/sensors", None, None),
            Self::SubmitMeasurement(id) => ("/v1/oracle/sensors", Some(id), Some("measurements")),
            Self::SubmitActivation => ("/v1/rve/activations", None, None),
            Self::ActivationStatus(id) => ("/v1/rve/activations", Some(id), None),
            Self::AggregateMeasurements => ("/v1/oracle/aggregate", None, None),
            Self::VerifyAndTrigger => ("/v1/rve/verify-and-trigger", None, None),
            Self::CommonsMetrics(_) => ("/v1/commons/metrics", None, None),
            Self::AuditTrail(_) => ("/v1/commons/audit-trail", None, None),
        }
    }

    /// Build the target URL for this operation
    ///
    /// The base URL is used verbatim: the fixed path is appended to it by
    /// plain concatenation, so `https://host` yields `https://host/v1/...`.
    /// No trailing-slash normalization happens.
    pub fn url(&self, base_url: &str) -> Result<Url, AtlasError> {
        let (prefix, param, suffix) = self.route();
        let raw = format!("{base_url}{prefix}");
        let mut url = Url::parse(&raw).map_err(|source| AtlasError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;

        if let Some(param) = param {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| AtlasError::CannotBeABase(base_url.to_string()))?;
            segments.push(param);
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }

        match *self {
            Self::CommonsMetrics(query) => {
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("metric", &query.metric);
                if let Some(ref bbox) = query.bbox {
                    pairs.append_pair("bbox", bbox);
                }
                if let Some(ref time_range) = query.time_range {
                    pairs.append_pair("timeRange", time_range);
                }
            }
            Self::AuditTrail(query) => {
                let mut pairs = url.query_pairs_mut();
                if let Some(ref since) = query.since {
                    pairs.append_pair("since", since);
                }
                pairs.append_pair("limit", &query.limit.to_string());
            }
            _ => {}
        }

        Ok(url)
    }
}
