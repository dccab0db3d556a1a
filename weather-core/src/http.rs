use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::FetchError;

/// Per-request deadline; covers connect and inactivity alike.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("weather-cli/", env!("CARGO_PKG_VERSION"));

/// Thin GET wrapper around [`reqwest::Client`]: one attempt per call, no
/// retries, a fixed timeout, and errors classified into [`FetchError`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Build a client with a custom deadline. Tests use this to exercise the
    /// timeout path without waiting out the full window.
    pub fn with_timeout(timeout: Duration) -> Self {
        // Same failure contract as `Client::new()`: building only fails if
        // the TLS backend cannot initialize.
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("HTTP client configuration is valid");
        Self { inner }
    }

    /// GET `url` and return the body text iff the status is exactly 200.
    ///
    /// A timeout aborts the in-flight connection and maps to
    /// [`FetchError::Timeout`]; any other transport failure maps to
    /// [`FetchError::Transport`] with the underlying message; a non-200
    /// status maps to [`FetchError::HttpStatus`].
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let res = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        res.text().await.map_err(classify_reqwest_error)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(err.to_string())
    }
}
