//! `atlas register-sensor`, `atlas submit-measurement` and `atlas aggregate`.

use anyhow::Result;
use serde_json::Value;

use super::{load_payload, parse_json_flag, report};
use crate::cli::types::{AggregateArgs, RegisterSensorArgs, SubmitMeasurementArgs};
use crate::domain::models::credential::{
    AggregationRequest, MeasurementSubmission, SensorRegistration,
};
use crate::domain::ports::HttpTransport;
use crate::infrastructure::atlas::AtlasClient;

/// Build the registration body from `--payload` or the typed flags
pub async fn sensor_payload(args: &RegisterSensorArgs) -> Result<Option<Value>> {
    let (Some(did), Some(owner)) = (&args.did, &args.owner) else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let registration = SensorRegistration {
        did: did.clone(),
        owner: owner.clone(),
        capabilities: args.capabilities.clone(),
    };
    Ok(Some(serde_json::to_value(registration)?))
}

/// Build the measurement body from `--payload` or the typed flags
pub async fn measurement_payload(args: &SubmitMeasurementArgs) -> Result<Option<Value>> {
    let (Some(timestamp), Some(value), Some(signature)) =
        (&args.timestamp, &args.value, &args.signature)
    else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let mut submission = MeasurementSubmission::new(
        timestamp.as_str(),
        parse_json_flag("value", value)?,
        signature.as_str(),
    );
    if let Some(ref schema) = args.schema {
        submission.schema.clone_from(schema);
    }
    Ok(Some(serde_json::to_value(submission)?))
}

/// Build the aggregation body from `--payload` or the typed flags
pub async fn aggregation_payload(args: &AggregateArgs) -> Result<Option<Value>> {
    let Some(ref query) = args.query else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let policy = match args.policy {
        Some(ref policy) => parse_json_flag("policy", policy)?,
        None => Value::Object(serde_json::Map::new()),
    };

    let request = AggregationRequest {
        query: parse_json_flag("query", query)?,
        policy,
    };
    Ok(Some(serde_json::to_value(request)?))
}

/// Register a sensor and print the response
pub async fn register_sensor<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: RegisterSensorArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = sensor_payload(&args).await?;
    let response = client.register_sensor(payload.as_ref()).await?;
    report(response, json_mode).await
}

/// Submit a measurement and print the response
pub async fn submit_measurement<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: SubmitMeasurementArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = measurement_payload(&args).await?;
    let response = client
        .submit_measurement(&args.sensor_id, payload.as_ref())
        .await?;
    report(response, json_mode).await
}

/// Aggregate measurements and print the resulting claim
pub async fn aggregate<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: AggregateArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = aggregation_payload(&args).await?;
    let response = client.aggregate_measurements(payload.as_ref()).await?;
    report(response, json_mode).await
}
