use thiserror::Error;

use crate::registry::ResourceKind;

/// Top-level error type for the `fabctl-api` crate.
///
/// Every failure is fatal to the current invocation: nothing here is
/// retried or locally recovered. The CLI maps these into user-facing
/// diagnostics and exit codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Preconditions ───────────────────────────────────────────────
    /// No password was supplied. Raised before any network call.
    #[error("parameter 'password' is required for authentication")]
    MissingPassword,

    // ── Authentication ──────────────────────────────────────────────
    /// The login call was classified as a failure.
    #[error("login to controller failed for {url}: {message}")]
    Authentication { url: String, message: String },

    // ── Registry ────────────────────────────────────────────────────
    /// The kind has no singular object endpoint (e.g. fabrics are
    /// query-only), so an update/delete URL cannot be built.
    #[error("{kind} has no object endpoint")]
    NoObjectPath { kind: ResourceKind },

    /// An object URL was requested without a resolved identifier.
    /// This is how "referenced resource does not exist" surfaces before
    /// any network call is made on update/delete paths.
    #[error("cannot build object URL for {kind}: no resolved identifier")]
    MissingIdentifier { kind: ResourceKind },

    // ── Resolution ──────────────────────────────────────────────────
    /// Zero records matched the name/condition.
    #[error("{kind}({what}) doesn't exist")]
    NotFound { kind: ResourceKind, what: String },

    /// More than one record matched the name/condition.
    #[error("{kind}({what}) isn't the only match")]
    Ambiguous { kind: ResourceKind, what: String },

    // ── Execution ───────────────────────────────────────────────────
    /// A CRUD call was classified as a failure (non-success status or
    /// transport failure recorded as [`status::NO_CONNECTION`]).
    ///
    /// [`status::NO_CONNECTION`]: crate::status::NO_CONNECTION
    #[error("{method} failed for {url} (status {status}): {message}")]
    Execution {
        method: String,
        url: String,
        status: i64,
        message: String,
        /// The submitted request body, when one was sent.
        body: Option<String>,
    },

    // ── Ambient ─────────────────────────────────────────────────────
    /// A response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response: {message}")]
    Deserialization { message: String, body: String },

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),
}

impl Error {
    /// Returns `true` if this error was raised before any network call
    /// could have been issued.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingPassword | Self::NoObjectPath { .. } | Self::MissingIdentifier { .. }
        )
    }

    /// Returns `true` for a failed name/condition resolution with zero
    /// matches.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
