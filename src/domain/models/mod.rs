//! Configuration, payload and query models.

pub mod commons;
pub mod config;
pub mod credential;

pub use commons::{AuditTrailQuery, MetricsQuery, DEFAULT_AUDIT_LIMIT};
pub use config::{redact_api_key, Config, LoggingConfig};
pub use credential::{
    ActivationRequest, AggregationRequest, DidCreation, IssueCredentialRequest,
    MeasurementSubmission, SensorRegistration, VerifyAndTriggerRequest, VerifyCredentialRequest,
    DEFAULT_MEASUREMENT_SCHEMA,
};
