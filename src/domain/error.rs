//! Errors returned by the Atlas client.

use thiserror::Error;

/// Errors returned by Atlas client operations
///
/// Two kinds exist. Construction errors mean the request was never sent.
/// Transport errors mean it was built but the exchange failed before a
/// response arrived. Any HTTP response, including 4xx and 5xx, is not an
/// error and is handed back to the caller as-is.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Base URL joined with the endpoint path is not a valid absolute URL
    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        /// The URL text that failed to parse
        url: String,
        /// Underlying parse failure
        #[source]
        source: url::ParseError,
    },

    /// Base URL cannot carry path segments (e.g. `mailto:` or `data:` URLs)
    #[error("Base URL cannot carry a path: {0}")]
    CannotBeABase(String),

    /// Payload could not be encoded as JSON
    #[error("Failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// API key contains characters not allowed in an HTTP header value
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// The HTTP transport could not be configured
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request could not be sent or no response headers were received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AtlasError {
    /// Returns true if the request failed before anything was sent
    pub const fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. }
                | Self::CannotBeABase(_)
                | Self::Encode(_)
                | Self::InvalidApiKey
                | Self::ClientBuild(_)
        )
    }

    /// Returns true if the request failed on the wire
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
