use thiserror::Error;

/// Top-level error type for the `fedinfo-api` crate.
///
/// Every failure an endpoint call can produce: transport, HTTP status,
/// decoding and cancellation. Nothing is retried or recovered inside the
/// client; callers decide what to do with these.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The access token cannot be sent as an HTTP header value.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// The client's cancellation token fired while the request was in flight.
    #[error("Request cancelled")]
    Cancelled,

    // ── HTTP status ─────────────────────────────────────────────────
    /// The server rejected the access token (HTTP 401).
    #[error("Unauthorized -- the access token was rejected")]
    Unauthorized,

    /// Any other non-2xx response. `message` comes from the
    /// `{"error": "..."}` body when the server sent one.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// The HTTP status code behind this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
