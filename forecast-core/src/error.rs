use reqwest::StatusCode;
use thiserror::Error;

/// Everything a single forecast fetch can fail with.
///
/// Every variant gets the same user-visible treatment (forecasts cleared,
/// one error line shown); the distinction exists so callers and tests can
/// assert on the kind.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint URL failed to parse. Raised at client construction,
    /// before any network I/O.
    #[error("invalid forecast endpoint URL: {0}")]
    InvalidUrl(String),

    /// Connectivity, DNS, TLS or body-read failure from the HTTP stack,
    /// surfaced as-is.
    #[error("failed to reach the forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Success status but nothing in the body.
    #[error("forecast service returned no data")]
    NoData,

    /// The body matched neither wire schema.
    #[error("failed to decode forecast response: {0}")]
    Decode(#[from] serde_json::Error),
}
