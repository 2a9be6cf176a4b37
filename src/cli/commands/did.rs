//! `atlas create-did`, `atlas resolve-did` and `atlas attach-stewardship`.

use anyhow::Result;
use serde_json::Value;

use super::{load_payload, parse_json_flag, report};
use crate::cli::types::{CreateDidArgs, PayloadArgs};
use crate::domain::models::credential::DidCreation;
use crate::domain::ports::HttpTransport;
use crate::infrastructure::atlas::AtlasClient;

/// Build the DID creation body from `--payload` or the typed flags
pub async fn did_payload(args: &CreateDidArgs) -> Result<Option<Value>> {
    let Some(ref controller) = args.controller else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let metadata = match args.metadata {
        Some(ref metadata) => parse_json_flag("metadata", metadata)?,
        None => Value::Object(serde_json::Map::new()),
    };

    let creation = DidCreation {
        controller: controller.clone(),
        metadata,
    };
    Ok(Some(serde_json::to_value(creation)?))
}

/// Create a DID and print the response
pub async fn create<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: CreateDidArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = did_payload(&args).await?;
    let response = client.create_did(payload.as_ref()).await?;
    report(response, json_mode).await
}

/// Resolve a DID and print its document
pub async fn resolve<T: HttpTransport>(
    client: &AtlasClient<T>,
    did: &str,
    json_mode: bool,
) -> Result<()> {
    let response = client.resolve_did(did).await?;
    report(response, json_mode).await
}

/// Attach a stewardship record to a DID and print the response
pub async fn attach_stewardship<T: HttpTransport>(
    client: &AtlasClient<T>,
    did: &str,
    body: PayloadArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = load_payload(body.payload.as_deref()).await?;
    let response = client.attach_stewardship(did, payload.as_ref()).await?;
    report(response, json_mode).await
}
