//! Ekispert API error types.

/// Errors that can occur when talking to the Ekispert API.
#[derive(Debug, thiserror::Error)]
pub enum EkispertError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check EKISPERT_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Station name matched nothing
    #[error("station \"{0}\" not found")]
    StationNotFound(String),

    /// Railway company name matched nothing
    #[error("railway company \"{0}\" not found")]
    CorporationNotFound(String),
}
