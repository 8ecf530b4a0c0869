// Session management
//
// Exchanges credentials for a bearer token at the fixed token endpoint,
// then owns the HTTP client and URL construction for the rest of the
// invocation. A `Session` is created once per invocation and passed
// explicitly to every executor/resolver call; the token is never
// persisted.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::registry::ResourceKind;
use crate::status;
use crate::transport::TransportConfig;

/// Header carrying the bearer token on every request after login.
pub const ACCESS_TOKEN_HEADER: &str = "X-ACCESS-TOKEN";

/// The fixed login endpoint.
const TOKEN_PATH: &str = "/controller/v2/tokens";

/// Connection parameters for one controller invocation.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Required credential. `None` or empty fails login as a
    /// precondition, before any HTTP call is issued.
    pub password: Option<SecretString>,
    pub timeout: Duration,
    pub verify_tls: bool,
}

impl SessionConfig {
    /// Config with the controller defaults: username "admin", 30 s
    /// timeout, certificate verification off.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            username: "admin".into(),
            password: None,
            timeout: Duration::from_secs(30),
            verify_tls: false,
        }
    }

    /// The controller root: `https://{host}:{port}`.
    pub fn base_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&format!("https://{}:{}", self.host, self.port))?)
    }
}

/// An authenticated controller session.
///
/// Holds the HTTP client, the controller root URL, and the bearer token
/// obtained at login. All CRUD and resolver operations are inherent
/// methods on this type (see `executor` and `resolver`).
pub struct Session {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl Session {
    /// Authenticate against `https://{host}:{port}` and return a live
    /// session.
    pub async fn login(config: &SessionConfig) -> Result<Self, Error> {
        let base = config.base_url()?;
        Self::login_at(base, config).await
    }

    /// Authenticate against an explicit controller root.
    ///
    /// `POST {base}/controller/v2/tokens` with the configured
    /// credentials; a classified success must contain `data.token_id`.
    /// Any failure terminates the invocation — there is no retry and no
    /// token refresh.
    pub async fn login_at(base: Url, config: &SessionConfig) -> Result<Self, Error> {
        let password = config
            .password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or(Error::MissingPassword)?;

        let transport = TransportConfig {
            verify_tls: config.verify_tls,
            timeout: config.timeout,
        };
        let http = transport.build_client()?;

        let url = join_path(&base, TOKEN_PATH)?;
        debug!("logging in at {url}");

        let payload = json!({
            "userName": config.username,
            "password": password.expose_secret(),
        });

        let (status, text) = match http.post(url.clone()).json(&payload).send().await {
            Err(e) => (status::NO_CONNECTION, e.to_string()),
            Ok(resp) => {
                let status = i64::from(resp.status().as_u16());
                (status, resp.text().await.unwrap_or_default())
            }
        };

        if !status::is_success(status) {
            return Err(Error::Authentication {
                url: url.to_string(),
                message: format!("status {status}: {}", preview(&text)),
            });
        }

        let token = extract_token(&text)?;
        debug!("login successful");

        Ok(Self { http, base, token })
    }

    /// Build a session around a pre-obtained token and HTTP client.
    ///
    /// For callers that already hold a valid token (or tests driving a
    /// local mock controller).
    pub fn with_token(http: reqwest::Client, base: Url, token: impl Into<String>) -> Self {
        Self {
            http,
            base,
            token: token.into(),
        }
    }

    /// The bearer token obtained at login.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The controller root URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The underlying HTTP client.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builders ────────────────────────────────────────────────

    /// The collection URL for a kind: `{base}{collection_path}`.
    pub fn collection_url(&self, kind: ResourceKind) -> Url {
        // Registry paths are static and absolute, so joining them onto
        // a valid base cannot fail.
        join_path(&self.base, kind.collection_path()).expect("registry paths are absolute")
    }

    /// The object URL for one resource: `{base}{object_path}/{id}`.
    ///
    /// Fails before any network call when `id` is empty (the referenced
    /// resource was never resolved) or when the kind has no object
    /// endpoint.
    pub fn object_url(&self, kind: ResourceKind, id: &str) -> Result<Url, Error> {
        let path = kind.object_path().ok_or(Error::NoObjectPath { kind })?;
        if id.is_empty() {
            return Err(Error::MissingIdentifier { kind });
        }
        join_path(&self.base, &format!("{path}/{id}"))
    }

    /// A passthrough URL for endpoints the registry does not model.
    ///
    /// Absolute URLs are kept as-is; anything else is treated as a
    /// controller-relative path.
    pub fn request_url(&self, path: &str) -> Result<Url, Error> {
        if path.starts_with("http") {
            Ok(Url::parse(path)?)
        } else {
            join_path(&self.base, path)
        }
    }
}

impl fmt::Debug for Session {
    /// The token never appears in debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base", &self.base)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Concatenate a path onto the controller root. An arbitrary path (the
/// `operate` passthrough) can yield an unparseable URL; that surfaces
/// as [`Error::InvalidUrl`], never a panic.
fn join_path(base: &Url, path: &str) -> Result<Url, Error> {
    let root = base.as_str().trim_end_matches('/');
    Ok(Url::parse(&format!("{root}{path}"))?)
}

/// Pull `data.token_id` out of the login response body.
fn extract_token(body: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::Deserialization {
        message: format!("login response is not JSON: {e}"),
        body: body.to_owned(),
    })?;

    value
        .get("data")
        .and_then(|d| d.get("token_id"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::Deserialization {
            message: "login response has no data.token_id".into(),
            body: body.to_owned(),
        })
}

/// Bounded excerpt of a response body for diagnostics.
pub(crate) fn preview(body: &str) -> String {
    const LIMIT: usize = 200;
    if body.chars().count() <= LIMIT {
        body.to_owned()
    } else {
        body.chars().take(LIMIT).collect()
    }
}
