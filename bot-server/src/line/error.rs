//! LINE API error types.

/// Errors that can occur when sending messages through the LINE API.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Channel access token rejected
    #[error("unauthorized: check LINE_CHANNEL_ACCESS_TOKEN")]
    Unauthorized,

    /// Rate limited by the LINE platform
    #[error("rate limited by LINE API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}
