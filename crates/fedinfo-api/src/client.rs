// Mastodon REST API client
//
// Wraps `reqwest::Client` with base-URL joining, bearer authentication,
// status checking and JSON decoding. Endpoint groups (instance, ...) are
// inherent methods in separate files; this module only owns the transport
// mechanics every endpoint shares.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Mastodon error bodies look like `{"error": "Record not found"}`, with an
/// optional `error_description` on OAuth failures.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Everything needed to construct a [`MastodonClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `https://mastodon.social`.
    pub server: Url,
    /// Bearer token. `None` sends anonymous requests.
    pub access_token: Option<SecretString>,
    pub transport: TransportConfig,
}

impl ClientConfig {
    pub fn new(server: Url) -> Self {
        Self {
            server,
            access_token: None,
            transport: TransportConfig::default(),
        }
    }
}

/// Async client for a Mastodon-compatible server's REST API.
///
/// Holds no mutable state: share it freely across tasks. Each endpoint
/// method performs exactly one request and never retries.
pub struct MastodonClient {
    http: reqwest::Client,
    base_url: Url,
    cancel: CancellationToken,
}

impl MastodonClient {
    /// Build a client from a `ClientConfig`.
    ///
    /// The access token, when present, is injected as a sensitive
    /// `Authorization: Bearer` default header on every request.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| Error::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = config.transport.build_client_with_headers(headers)?;
        Ok(Self::with_client(http, config.server.clone()))
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn with_client(http: reqwest::Client, server: Url) -> Self {
        Self {
            http,
            base_url: normalize_base_url(server),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the cancellation token raced against every request.
    ///
    /// Cancelling the token aborts whatever request is in flight and makes
    /// every later call fail with [`Error::Cancelled`].
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// The server base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The token this client races requests against.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an endpoint path (e.g. `"/api/v1/instance"`) onto the base URL,
    /// keeping any path prefix the base carries.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(Error::Cancelled),
            result = self.send_get(url) => result,
        }
    }

    async fn send_get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// Check the status first, then decode. A non-2xx status is an error
    /// even when the body would have decoded.
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        debug!(status = status.as_u16(), "request failed");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Unauthorized;
        }

        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse {
                error,
                error_description: Some(desc),
            }) => format!("{error}: {desc}"),
            Ok(err) => err.error,
            Err(_) if raw.trim().is_empty() => status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_owned),
            Err(_) => raw,
        };

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Make sure the base URL ends in `/` so `Url::join` appends rather than
/// replacing the last path segment.
fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    url
}
