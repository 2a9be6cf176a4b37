//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::commons::DEFAULT_AUDIT_LIMIT;
use crate::domain::models::config::Config;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "atlas")]
#[command(about = "Atlas - credential issuance service client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .atlas/config.yaml and .atlas/local.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the Atlas service
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Bearer token for authenticated operations
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Transport timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref base_url) = self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(ref api_key) = self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = Some(timeout_secs);
        }
    }
}

/// One subcommand per Atlas operation
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a DID (POST /v1/rl-dids)
    CreateDid(CreateDidArgs),

    /// Resolve a DID document (GET /v1/rl-dids/{did})
    ResolveDid {
        /// DID to resolve, e.g. did:rl:alice
        did: String,
    },

    /// Attach stewardship data to a DID (PATCH /v1/rl-dids/{did}/stewardship)
    AttachStewardship {
        /// DID of the land or resource
        did: String,

        /// Stewardship record
        #[command(flatten)]
        body: PayloadArgs,
    },

    /// Issue a verifiable credential (POST /v1/vrc/issue)
    Issue(IssueArgs),

    /// Verify a credential (POST /v1/vrc/verify)
    Verify(PayloadArgs),

    /// Show a credential's status (GET /v1/vrc/{id}/status)
    Status {
        /// Credential identifier
        credential_id: String,
    },

    /// Register an oracle sensor (POST /v1/oracle/sensors)
    RegisterSensor(RegisterSensorArgs),

    /// Submit a sensor measurement (POST /v1/oracle/sensors/{id}/measurements)
    SubmitMeasurement(SubmitMeasurementArgs),

    /// Aggregate measurements into a claim (POST /v1/oracle/aggregate)
    Aggregate(AggregateArgs),

    /// Request an activation (POST /v1/rve/activations)
    SubmitActivation(SubmitActivationArgs),

    /// Show an activation (GET /v1/rve/activations/{id})
    ActivationStatus {
        /// Activation identifier
        activation_id: String,
    },

    /// Verify an activation and trigger its action (POST /v1/rve/verify-and-trigger)
    VerifyAndTrigger(VerifyAndTriggerArgs),

    /// Read a commons metric (GET /v1/commons/metrics)
    Metrics(MetricsArgs),

    /// List recent audit events (GET /v1/commons/audit-trail)
    AuditTrail(AuditTrailArgs),
}

/// Raw request body
#[derive(Args, Debug, Default)]
pub struct PayloadArgs {
    /// Request body: inline JSON, @FILE to read a file, or - for stdin
    #[arg(short, long, value_name = "JSON|@FILE|-")]
    pub payload: Option<String>,
}

/// Arguments for `atlas create-did`
#[derive(Args, Debug)]
pub struct CreateDidArgs {
    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Controller DID
    #[arg(long, conflicts_with = "payload")]
    pub controller: Option<String>,

    /// Document metadata as inline JSON
    #[arg(long, conflicts_with = "payload", requires = "controller")]
    pub metadata: Option<String>,
}

/// Arguments for `atlas issue`
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Issuer DID
    #[arg(long, conflicts_with = "payload", requires_all = ["subject", "credential_type"])]
    pub issuer: Option<String>,

    /// Subject DID
    #[arg(long, conflicts_with = "payload", requires = "issuer")]
    pub subject: Option<String>,

    /// Credential type
    #[arg(long = "type", conflicts_with = "payload", requires = "issuer")]
    pub credential_type: Option<String>,

    /// Credential subject claims as inline JSON
    #[arg(long, conflicts_with = "payload", requires = "issuer")]
    pub claims: Option<String>,
}

/// Arguments for `atlas register-sensor`
#[derive(Args, Debug)]
pub struct RegisterSensorArgs {
    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Sensor DID
    #[arg(long, conflicts_with = "payload", requires = "owner")]
    pub did: Option<String>,

    /// Owner DID
    #[arg(long, conflicts_with = "payload", requires = "did")]
    pub owner: Option<String>,

    /// Sensor capability (repeatable)
    #[arg(long = "capability", conflicts_with = "payload", requires = "did")]
    pub capabilities: Vec<String>,
}

/// Arguments for `atlas submit-measurement`
#[derive(Args, Debug)]
pub struct SubmitMeasurementArgs {
    /// Sensor identifier
    pub sensor_id: String,

    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Measurement time (RFC 3339)
    #[arg(long, conflicts_with = "payload", requires_all = ["value", "signature"])]
    pub timestamp: Option<String>,

    /// Measurement values as inline JSON
    #[arg(long, conflicts_with = "payload", requires = "timestamp")]
    pub value: Option<String>,

    /// Sensor signature over the measurement
    #[arg(long, conflicts_with = "payload", requires = "timestamp")]
    pub signature: Option<String>,

    /// Measurement schema identifier
    #[arg(long, conflicts_with = "payload", requires = "timestamp")]
    pub schema: Option<String>,
}

/// Arguments for `atlas aggregate`
#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Measurement selection as inline JSON, e.g. {"metric":"soilCarbon"}
    #[arg(long, conflicts_with = "payload")]
    pub query: Option<String>,

    /// Aggregation policy as inline JSON, e.g. {"minTrustScore":0.7}
    #[arg(long, conflicts_with = "payload", requires = "query")]
    pub policy: Option<String>,
}

/// Arguments for `atlas submit-activation`
#[derive(Args, Debug)]
pub struct SubmitActivationArgs {
    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Requesting subject DID
    #[arg(long, conflicts_with = "payload", requires_all = ["credential_id", "action"])]
    pub subject: Option<String>,

    /// Credential backing the activation
    #[arg(long, conflicts_with = "payload", requires = "subject")]
    pub credential_id: Option<String>,

    /// Oracle claim backing the activation
    #[arg(long, conflicts_with = "payload", requires = "subject")]
    pub claim_id: Option<String>,

    /// Requested action as inline JSON, e.g. {"type":"incentive","amount":500}
    #[arg(long, conflicts_with = "payload", requires = "subject")]
    pub action: Option<String>,
}

/// Arguments for `atlas verify-and-trigger`
#[derive(Args, Debug)]
pub struct VerifyAndTriggerArgs {
    /// Raw request body
    #[command(flatten)]
    pub body: PayloadArgs,

    /// Activation to verify
    #[arg(long, conflicts_with = "payload")]
    pub activation_id: Option<String>,

    /// Condition as inline JSON (repeatable)
    #[arg(long = "condition", conflicts_with = "payload", requires = "activation_id")]
    pub conditions: Vec<String>,

    /// Action to trigger on success as inline JSON
    #[arg(long, conflicts_with = "payload", requires = "activation_id")]
    pub on_success: Option<String>,
}

/// Arguments for `atlas metrics`
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Metric name, e.g. soilCarbon
    pub metric: String,

    /// Bounding box as minLon,minLat,maxLon,maxLat
    #[arg(long, allow_hyphen_values = true)]
    pub bbox: Option<String>,

    /// Time range expression
    #[arg(long)]
    pub time_range: Option<String>,
}

/// Arguments for `atlas audit-trail`
#[derive(Args, Debug)]
pub struct AuditTrailArgs {
    /// Only list events after this RFC 3339 timestamp
    #[arg(long)]
    pub since: Option<String>,

    /// Maximum number of events
    #[arg(long, default_value_t = DEFAULT_AUDIT_LIMIT)]
    pub limit: u32,
}
