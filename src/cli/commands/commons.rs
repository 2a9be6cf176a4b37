//! `atlas metrics` and `atlas audit-trail`.

use anyhow::Result;

use super::report;
use crate::cli::types::{AuditTrailArgs, MetricsArgs};
use crate::domain::models::commons::{AuditTrailQuery, MetricsQuery};
use crate::domain::ports::HttpTransport;
use crate::infrastructure::atlas::AtlasClient;

impl From<MetricsArgs> for MetricsQuery {
    fn from(args: MetricsArgs) -> Self {
        Self {
            metric: args.metric,
            bbox: args.bbox,
            time_range: args.time_range,
        }
    }
}

impl From<AuditTrailArgs> for AuditTrailQuery {
    fn from(args: AuditTrailArgs) -> Self {
        Self {
            since: args.since,
            limit: args.limit,
        }
    }
}

/// Read a commons metric and print it
pub async fn metrics<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: MetricsArgs,
    json_mode: bool,
) -> Result<()> {
    let response = client.commons_metrics(&args.into()).await?;
    report(response, json_mode).await
}

/// List recent audit events
pub async fn audit_trail<T: HttpTransport>(
    client: &AtlasClient<T>,
    args: AuditTrailArgs,
    json_mode: bool,
) -> Result<()> {
    let response = client.audit_trail(&args.into()).await?;
    report(response, json_mode).await
}
