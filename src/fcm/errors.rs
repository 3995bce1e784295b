use thiserror::Error;

/// Failure returned by a push provider for a single send.
///
/// `Display` is the human readable reason that gets surfaced to the
/// caller of the HTTP API.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("failed to obtain access token: {0}")]
    Auth(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("request to push provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from push provider: {0}")]
    InvalidResponse(String),
}
