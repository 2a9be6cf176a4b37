//! `atlas issue`, `atlas verify` and `atlas status`.

use anyhow::Result;
use serde_json::Value;

use super::{load_payload, parse_json_flag, report};
use crate::cli::types::{IssueArgs, PayloadArgs};
use crate::domain::models::credential::IssueCredentialRequest;
use crate::domain::ports::HttpTransport;
use crate::infrastructure::atlas::AtlasClient;

/// Build the issuance body from `--payload` or the typed flags
pub async fn issue_payload(args: &IssueArgs) -> Result<Option<Value>> {
    let (Some(issuer), Some(subject), Some(credential_type)) =
        (&args.issuer, &args.subject, &args.credential_type)
    else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let credential_subject = match args.claims {
        Some(ref claims) => parse_json_flag("claims", claims)?,
        None => Value::Object(serde_json::Map::new()),
    };

    let request = IssueCredentialRequest {
        issuer: issuer.clone(),
        subject: subject.clone(),
        credential_type: credential_type.clone(),
        credential_subject,
    };
    Ok(Some(serde_json::to_value(request)?))
}

/// Issue a credential and print the response
pub async fn issue<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: IssueArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = issue_payload(&args).await?;
    let response = client.issue_credential(payload.as_ref()).await?;
    report(response, json_mode).await
}

/// Verify a credential and print the result
pub async fn verify<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: PayloadArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = load_payload(args.payload.as_deref()).await?;
    let response = client.verify_credential(payload.as_ref()).await?;
    report(response, json_mode).await
}

/// Print a credential's status
pub async fn status<T: HttpTransport>(
    client: &AtlasClient<T>,
    credential_id: &str,
    json_mode: bool,
) -> Result<()> {
    let response = client.credential_status(credential_id).await?;
    report(response, json_mode).await
}
