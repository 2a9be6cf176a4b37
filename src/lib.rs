//! Atlas - client for the Atlas credential issuance service
//!
//! The core is [`AtlasClient`], a thin wrapper that builds one authenticated
//! JSON request per call, sends it through an injected [`HttpTransport`],
//! and returns the raw response. Status codes are not interpreted and
//! nothing is retried.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): errors, configuration and payload models, transport port
//! - **Infrastructure Layer** (`infrastructure`): reqwest client, figment config, tracing setup
//! - **CLI Layer** (`cli`): the `atlas` command-line interface
//!
//! # Example
//!
//! ```no_run
//! use atlas::AtlasClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), atlas::AtlasError> {
//! let client = AtlasClient::new("https://atlas.example.com", Some("secret123".to_string()));
//! let response = client.issue_credential(Some(&json!({"subject": "alice"}))).await?;
//! println!("status: {}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::AtlasError;
pub use domain::models::{
    ActivationRequest, AggregationRequest, AuditTrailQuery, Config, DidCreation,
    IssueCredentialRequest, LoggingConfig, MeasurementSubmission, MetricsQuery,
    SensorRegistration, VerifyAndTriggerRequest, VerifyCredentialRequest,
};
pub use domain::ports::HttpTransport;
pub use infrastructure::atlas::{AtlasClient, Endpoint};
pub use infrastructure::config::{ConfigError, ConfigLoader};
