//! Query parameters for the commons read endpoints

/// Number of audit events requested when no limit is given
pub const DEFAULT_AUDIT_LIMIT: u32 = 50;

/// Query for `GET /v1/commons/metrics`
///
/// Unset optional fields are left out of the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsQuery {
    /// Metric name, e.g. `soilCarbon`
    pub metric: String,

    /// Bounding box as `minLon,minLat,maxLon,maxLat`
    pub bbox: Option<String>,

    /// Time range expression understood by the service
    pub time_range: Option<String>,
}

impl MetricsQuery {
    /// Query a metric over the service's default area and time range
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            bbox: None,
            time_range: None,
        }
    }

    /// Restrict the query to a bounding box
    #[must_use]
    pub fn with_bbox(mut self, bbox: impl Into<String>) -> Self {
        self.bbox = Some(bbox.into());
        self
    }

    /// Restrict the query to a time range
    #[must_use]
    pub fn with_time_range(mut self, time_range: impl Into<String>) -> Self {
        self.time_range = Some(time_range.into());
        self
    }
}

/// Query for `GET /v1/commons/audit-trail`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTrailQuery {
    /// Only return events after this RFC 3339 timestamp
    pub since: Option<String>,

    /// Maximum number of events to return
    pub limit: u32,
}

impl Default for AuditTrailQuery {
    fn default() -> Self {
        Self {
            since: None,
            limit: DEFAULT_AUDIT_LIMIT,
        }
    }
}
