//! Network feed error types.

/// Errors that can occur when loading the transit network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse feed JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read a local network file
    #[error("failed to read network file {path}: {message}")]
    File { path: String, message: String },
}
