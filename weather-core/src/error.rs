use thiserror::Error;

/// Classified failure causes for a weather fetch.
///
/// Each variant keeps its cause distinguishable to callers and tests; the
/// `Display` text is what ends up in front of the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS or connection-reset failure before a response
    /// arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// No response within the fixed per-request window; the in-flight
    /// connection has been dropped.
    #[error("request timed out")]
    Timeout,

    /// The provider answered with something other than 200.
    #[error("provider returned HTTP {code} {reason}")]
    HttpStatus { code: u16, reason: String },

    /// Malformed JSON or a missing expected field in the response body.
    #[error("failed to parse provider response: {0}")]
    Parse(String),
}
