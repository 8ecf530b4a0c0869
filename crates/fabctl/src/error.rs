//! CLI error types with miette diagnostics.
//!
//! Maps `fabctl_api::Error` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use fabctl_api::NO_CONNECTION;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const AMBIGUOUS: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the controller: {message}")]
    #[diagnostic(
        code(fabctl::connection_failed),
        help(
            "Check that the controller is running and --host/--port point at\n\
             its northbound interface. Self-signed certificates are accepted\n\
             unless --verify-tls is set."
        )
    )]
    ConnectionFailed { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("No password configured")]
    #[diagnostic(
        code(fabctl::no_password),
        help("Set --password, AC_PASSWORD, or AC_PASSWD.")
    )]
    MissingPassword,

    #[error("Authentication failed at {url}")]
    #[diagnostic(
        code(fabctl::auth_failed),
        help("Verify the controller account and password.\n{message}")
    )]
    AuthFailed { url: String, message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{kind}({what}) doesn't exist")]
    #[diagnostic(
        code(fabctl::not_found),
        help("Run: fabctl {kind} query to see available objects")
    )]
    NotFound { kind: String, what: String },

    #[error("{kind}({what}) isn't the only match")]
    #[diagnostic(
        code(fabctl::ambiguous),
        help(
            "More than one {kind} matched. Scope the lookup with its parent\n\
             (e.g. --network) to pick a single object."
        )
    )]
    Ambiguous { kind: String, what: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("Controller rejected {method} {url} with status {status}: {message}")]
    #[diagnostic(code(fabctl::api_error))]
    ApiError {
        method: String,
        url: String,
        status: i64,
        message: String,
    },

    #[error("Unusable controller response: {message}")]
    #[diagnostic(code(fabctl::bad_response))]
    BadResponse { message: String },

    // ── Usage / validation ───────────────────────────────────────────

    #[error("Missing required parameter '{parameter}'")]
    #[diagnostic(code(fabctl::missing_parameter), help("Set {hint}."))]
    MissingParameter {
        parameter: &'static str,
        hint: &'static str,
    },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fabctl::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid JSON body: {0}")]
    #[diagnostic(code(fabctl::json), help("Check the request body and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::MissingPassword | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Ambiguous { .. } => exit_code::AMBIGUOUS,
            Self::MissingParameter { .. } | Self::Validation { .. } | Self::Json(_) => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── fabctl_api::Error → CliError mapping ─────────────────────────────

impl From<fabctl_api::Error> for CliError {
    fn from(err: fabctl_api::Error) -> Self {
        use fabctl_api::Error;

        match err {
            Error::MissingPassword => CliError::MissingPassword,

            Error::Authentication { url, message } => {
                // A transport failure during login is a connectivity
                // problem, not a credential problem.
                if message.starts_with(&format!("status {NO_CONNECTION}")) {
                    CliError::ConnectionFailed { message }
                } else {
                    CliError::AuthFailed { url, message }
                }
            }

            Error::NotFound { kind, what } => CliError::NotFound {
                kind: kind.to_string(),
                what,
            },

            Error::Ambiguous { kind, what } => CliError::Ambiguous {
                kind: kind.to_string(),
                what,
            },

            Error::Execution {
                method,
                url,
                status,
                message,
                body: _,
            } => {
                if status == NO_CONNECTION {
                    CliError::ConnectionFailed { message }
                } else {
                    CliError::ApiError {
                        method,
                        url,
                        status,
                        message,
                    }
                }
            }

            Error::NoObjectPath { kind } => CliError::Validation {
                field: kind.to_string(),
                reason: format!("{kind} objects cannot be addressed individually"),
            },

            Error::MissingIdentifier { kind } => CliError::Validation {
                field: kind.to_string(),
                reason: format!("no {kind} identifier was resolved"),
            },

            Error::Deserialization { message, body: _ } => CliError::BadResponse { message },

            Error::InvalidUrl(e) => CliError::Validation {
                field: "url".into(),
                reason: e.to_string(),
            },

            Error::Tls(message) => CliError::ConnectionFailed { message },
        }
    }
}
