use thiserror::Error;

/// Failure modes of a single dashboard fetch.
///
/// Errors are local to the widget that issued the request: a failed fetch
/// leaves that widget empty and never affects its siblings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
