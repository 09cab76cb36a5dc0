/// Error types for deeplink operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No detector recognized the input as a supported deeplink, URI or address.
    #[error("Unrecognized deeplink format")]
    UnrecognizedFormat,

    /// JSON serialization/deserialization errors.
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for deeplink operations.
pub type Result<T> = std::result::Result<T, Error>;
