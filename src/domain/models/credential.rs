//! Typed request bodies accepted by the Atlas service
//!
//! These are conveniences. Every client operation takes any `Serialize`
//! payload, so callers may build their own shapes or pass raw
//! `serde_json::Value`s instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /v1/vrc/issue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCredentialRequest {
    /// DID of the issuing party
    pub issuer: String,

    /// DID of the credential subject
    pub subject: String,

    /// Credential type, e.g. `StewardshipCredential`
    #[serde(rename = "type")]
    pub credential_type: String,

    /// Claims about the subject
    #[serde(default)]
    pub credential_subject: Value,
}

/// Body of `POST /v1/vrc/verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyCredentialRequest {
    /// The credential document as previously issued
    pub credential: Value,
}

/// Body of `POST /v1/oracle/sensors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRegistration {
    /// DID assigned to the sensor
    pub did: String,

    /// DID of the sensor owner
    pub owner: String,

    /// Measurement capabilities, e.g. `soil-moisture`
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Body of `POST /v1/oracle/sensors/{id}/measurements`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSubmission {
    /// Measurement time as an RFC 3339 string
    pub timestamp: String,

    /// Raw measurement values
    pub payload: Value,

    /// Sensor signature over the payload
    pub signature: String,

    /// Measurement schema identifier
    #[serde(default = "default_measurement_schema")]
    pub schema: String,
}

/// Schema used by the service's reference soil sensors
pub const DEFAULT_MEASUREMENT_SCHEMA: &str = "soil-moisture.v1";

fn default_measurement_schema() -> String {
    DEFAULT_MEASUREMENT_SCHEMA.to_string()
}

impl MeasurementSubmission {
    /// Create a submission using the default measurement schema
    pub fn new(timestamp: impl Into<String>, payload: Value, signature: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            payload,
            signature: signature.into(),
            schema: default_measurement_schema(),
        }
    }
}

/// Body of `POST /v1/rl-dids`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidCreation {
    /// DID of the controlling party
    pub controller: String,

    /// Free-form DID document metadata, e.g. location or land type
    #[serde(default)]
    pub metadata: Value,
}

/// Body of `POST /v1/oracle/aggregate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRequest {
    /// Selection of measurements, e.g. metric and bounding box
    pub query: Value,

    /// Aggregation policy, e.g. a minimum trust score
    #[serde(default)]
    pub policy: Value,
}

/// Body of `POST /v1/rve/activations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    /// DID requesting the activation
    pub subject: String,

    /// Credential backing the request
    pub credential_id: String,

    /// Oracle claim backing the request
    ///
    /// Verify-and-trigger only succeeds for activations that carry both a
    /// credential and a claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,

    /// Action to trigger once conditions are verified, e.g.
    /// `{"type": "incentive", "amount": 500, "currency": "USDC"}`
    pub requested_action: Value,
}

/// Body of `POST /v1/rve/verify-and-trigger`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAndTriggerRequest {
    /// Activation to verify
    pub activation_id: String,

    /// Conditions to check, e.g. `{"credentialId": ...}`
    #[serde(default)]
    pub conditions: Vec<Value>,

    /// What to trigger when verification passes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Value>,
}
