//! CLI error types with miette diagnostics.
//!
//! Maps `fedinfo_api::Error` and `ConfigError` into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use fedinfo_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const CANCELLED: i32 = 130;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(fedinfo::connection_failed),
        help(
            "Check that the server is reachable.\n\
             Try: fedinfo --server https://mastodon.social instance"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(fedinfo::tls_error),
        help("Check ca_cert in your profile, or use --insecure (-k) for test servers.")
    )]
    TlsError { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(fedinfo::timeout),
        help("Increase the timeout with --timeout or check the server's responsiveness.")
    )]
    Timeout,

    #[error("Request cancelled")]
    #[diagnostic(code(fedinfo::cancelled))]
    Cancelled,

    // ── Authentication ───────────────────────────────────────────────
    #[error("The server rejected the access token")]
    #[diagnostic(
        code(fedinfo::auth_failed),
        help(
            "Instance endpoints are public; try again without --access-token,\n\
             or refresh the token configured for this profile."
        )
    )]
    AuthFailed,

    // ── API ──────────────────────────────────────────────────────────
    #[error("Not found: {message}")]
    #[diagnostic(
        code(fedinfo::not_found),
        help("The server may not implement this endpoint, or hides it (e.g. peers).")
    )]
    NotFound { message: String },

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(fedinfo::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from server: {message}")]
    #[diagnostic(
        code(fedinfo::invalid_response),
        help("Run with -vv to see the request, then check the server's API version.")
    )]
    InvalidResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fedinfo::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fedinfo::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: fedinfo config init <server>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No server configured")]
    #[diagnostic(
        code(fedinfo::no_config),
        help(
            "Pass --server, set FEDINFO_SERVER, or create a profile with:\n\
             fedinfo config init <server>\n\
             Config file: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Profile '{name}' already exists")]
    #[diagnostic(
        code(fedinfo::profile_exists),
        help("Use --force to replace it.")
    )]
    ProfileExists { name: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(fedinfo::config),
        help("Fix the file shown by `fedinfo config path`, or remove it to start over.")
    )]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(fedinfo::render))]
    Render(String),
}

impl CliError {
    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Cancelled => exit_code::CANCELLED,
            Self::AuthFailed => exit_code::AUTH,
            Self::NotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<fedinfo_api::Error> for CliError {
    fn from(err: fedinfo_api::Error) -> Self {
        use fedinfo_api::Error;

        match err {
            Error::Transport(e) if e.is_timeout() => CliError::Timeout,
            Error::Transport(e) => CliError::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                source: Box::new(e),
            },
            Error::InvalidUrl(e) => CliError::Validation {
                field: "server".into(),
                reason: e.to_string(),
            },
            Error::InvalidToken(reason) => CliError::Validation {
                field: "access_token".into(),
                reason,
            },
            Error::Tls(message) => CliError::TlsError { message },
            Error::Cancelled => CliError::Cancelled,
            Error::Unauthorized => CliError::AuthFailed,
            Error::Api {
                status: 404,
                message,
            } => CliError::NotFound { message },
            Error::Api { status, message } => CliError::ApiError { status, message },
            Error::Deserialization { message, .. } => CliError::InvalidResponse { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::ProfileNotFound { name, available } => {
                CliError::ProfileNotFound { name, available }
            }
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
