/// Error types shared across MCP server crates.
///
/// These errors cover the request plumbing every server has in common: decoding a
/// tool's argument bag and encoding structured payloads. Application-specific errors
/// should be defined in each server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}
