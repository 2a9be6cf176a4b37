//! CLI command implementations.
//!
//! Each command sends one request through the client and prints the
//! response. The CLI is where HTTP statuses are finally interpreted: a
//! non-2xx response is printed and then reported as a failure.

pub mod commons;
pub mod credential;
pub mod did;
pub mod oracle;
pub mod rve;

use anyhow::{Context, Result};
use reqwest::Response;
use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::cli::output::{output, ResponseOutput};

/// Resolve a `--payload` argument into a JSON value
///
/// Accepts inline JSON, `@path` to read a file, or `-` to read stdin.
pub async fn load_payload(arg: Option<&str>) -> Result<Option<Value>> {
    let Some(arg) = arg else {
        return Ok(None);
    };

    let text = if arg == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read payload from stdin")?;
        buf
    } else if let Some(path) = arg.strip_prefix('@') {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read payload file {path}"))?
    } else {
        arg.to_string()
    };

    let value = serde_json::from_str(&text).context("Payload is not valid JSON")?;
    Ok(Some(value))
}

/// Parse an inline JSON flag value, naming the flag on failure
pub(crate) fn parse_json_flag(flag: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("--{flag} is not valid JSON"))
}

/// Print a response and fail on non-2xx statuses
pub async fn report(response: Response, json_mode: bool) -> Result<()> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    output(&ResponseOutput::new(status, &body), json_mode);

    if !status.is_success() {
        anyhow::bail!("Atlas responded with HTTP {status}");
    }
    Ok(())
}
