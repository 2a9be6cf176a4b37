//! `atlas submit-activation`, `atlas activation-status` and
//! `atlas verify-and-trigger`.

use anyhow::Result;
use serde_json::Value;

use super::{load_payload, parse_json_flag, report};
use crate::cli::types::{SubmitActivationArgs, VerifyAndTriggerArgs};
use crate::domain::models::credential::{ActivationRequest, VerifyAndTriggerRequest};
use crate::domain::ports::HttpTransport;
use crate::infrastructure::atlas::AtlasClient;

/// Build the activation body from `--payload` or the typed flags
pub async fn activation_payload(args: &SubmitActivationArgs) -> Result<Option<Value>> {
    let (Some(subject), Some(credential_id), Some(action)) =
        (&args.subject, &args.credential_id, &args.action)
    else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let request = ActivationRequest {
        subject: subject.clone(),
        credential_id: credential_id.clone(),
        claim_id: args.claim_id.clone(),
        requested_action: parse_json_flag("action", action)?,
    };
    Ok(Some(serde_json::to_value(request)?))
}

/// Build the verify-and-trigger body from `--payload` or the typed flags
pub async fn trigger_payload(args: &VerifyAndTriggerArgs) -> Result<Option<Value>> {
    let Some(ref activation_id) = args.activation_id else {
        return load_payload(args.body.payload.as_deref()).await;
    };

    let conditions = args
        .conditions
        .iter()
        .map(|condition| parse_json_flag("condition", condition))
        .collect::<Result<Vec<_>>>()?;
    let on_success = args
        .on_success
        .as_deref()
        .map(|raw| parse_json_flag("on-success", raw))
        .transpose()?;

    let request = VerifyAndTriggerRequest {
        activation_id: activation_id.clone(),
        conditions,
        on_success,
    };
    Ok(Some(serde_json::to_value(request)?))
}

/// Submit an activation request and print the response
pub async fn submit_activation<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: SubmitActivationArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = activation_payload(&args).await?;
    let response = client.submit_activation(payload.as_ref()).await?;
    report(response, json_mode).await
}

/// Print the state of an activation
pub async fn activation_status<T: HttpTransport>(
    client: &AtlasClient<T>,
    activation_id: &str,
    json_mode: bool,
) -> Result<()> {
    let response = client.activation_status(activation_id).await?;
    report(response, json_mode).await
}

/// Verify an activation and print the trigger result
pub async fn verify_and_trigger<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: VerifyAndTriggerArgs,
    json_mode: bool,
) -> Result<()> {
    let payload = trigger_payload(&args).await?;
    let response = client.verify_and_trigger(payload.as_ref()).await?;
    report(response, json_mode).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::PayloadArgs;
    use serde_json::json;

    fn activation_args(claim_id: Option<&str>, action: &str) -> SubmitActivationArgs {
        SubmitActivationArgs {
            body: PayloadArgs::default(),
            subject: Some("did:rl:farm".to_string()),
            credential_id: Some("vrc-1".to_string()),
            claim_id: claim_id.map(str::to_string),
            action: Some(action.to_string()),
        }
    }

    #[tokio::test]
    async fn test_activation_flags_carry_structured_action() {
        let args = activation_args(
            Some("claim-9"),
            r#"{"type":"incentive","amount":500,"currency":"USDC"}"#,
        );

        let payload = activation_payload(&args).await.unwrap();

        assert_eq!(
            payload,
            Some(json!({
                "subject": "did:rl:farm",
                "credentialId": "vrc-1",
                "claimId": "claim-9",
                "requestedAction": {"type": "incentive", "amount": 500, "currency": "USDC"}
            }))
        );
    }

    #[tokio::test]
    async fn test_activation_action_must_be_json() {
        let args = activation_args(None, "release-funds");

        let err = activation_payload(&args).await.unwrap_err();

        assert_eq!(err.to_string(), "--action is not valid JSON");
    }

    #[tokio::test]
    async fn test_trigger_flags_build_body() {
        let args = VerifyAndTriggerArgs {
            body: PayloadArgs::default(),
            activation_id: Some("act-1".to_string()),
            conditions: vec![
                r#"{"credentialId":"vrc-1"}"#.to_string(),
                r#"{"claimId":"claim-9"}"#.to_string(),
            ],
            on_success: Some(r#"{"smartContract":"payout"}"#.to_string()),
        };

        let payload = trigger_payload(&args).await.unwrap();

        assert_eq!(
            payload,
            Some(json!({
                "activationId": "act-1",
                "conditions": [{"credentialId": "vrc-1"}, {"claimId": "claim-9"}],
                "onSuccess": {"smartContract": "payout"}
            }))
        );
    }

    #[tokio::test]
    async fn test_trigger_without_on_success_omits_it() {
        let args = VerifyAndTriggerArgs {
            body: PayloadArgs::default(),
            activation_id: Some("act-1".to_string()),
            conditions: Vec::new(),
            on_success: None,
        };

        let payload = trigger_payload(&args).await.unwrap().unwrap();

        assert_eq!(payload, json!({"activationId": "act-1", "conditions": []}));
    }
}
