//! Connection parameter resolution.
//!
//! Builds a `SessionConfig` from CLI flags with environment fallbacks.
//! Several parameters accept two environment names for compatibility
//! with existing automation; the resolution order is always
//! flag > primary env > secondary env > default.

use std::time::Duration;

use secrecy::SecretString;

use fabctl_api::SessionConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

const ENV_PORT: [&str; 2] = ["AC_NORTH_PORT", "AC_PORT"];
const ENV_USERNAME: [&str; 2] = ["AC_USERNAME", "AC_USER"];
const ENV_PASSWORD: [&str; 2] = ["AC_PASSWORD", "AC_PASSWD"];

/// Resolve the full connection configuration or fail with a usage
/// error naming the missing parameter.
pub fn resolve(global: &GlobalOpts) -> Result<SessionConfig, CliError> {
    // Host: flag or AC_HOST (clap resolves the env fallback).
    let host = global.host.clone().ok_or(CliError::MissingParameter {
        parameter: "host",
        hint: "--host or AC_HOST",
    })?;

    // Port: two env names, the northbound one wins.
    let port = match global.port {
        Some(port) => port,
        None => parse_port(first_env(&ENV_PORT))?.ok_or(CliError::MissingParameter {
            parameter: "port",
            hint: "--port, AC_NORTH_PORT, or AC_PORT",
        })?,
    };

    let mut config = SessionConfig::new(host, port);

    if let Some(username) = global.username.clone().or_else(|| first_env(&ENV_USERNAME)) {
        config.username = username;
    }

    config.password = global
        .password
        .clone()
        .or_else(|| first_env(&ENV_PASSWORD))
        .map(SecretString::from);

    config.timeout = Duration::from_secs(global.timeout);
    config.verify_tls = global.verify_tls;

    Ok(config)
}

/// First non-empty value among the given environment variables.
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}

fn parse_port(value: Option<String>) -> Result<Option<u16>, CliError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u16>()
            .map(Some)
            .map_err(|_| CliError::Validation {
                field: "port".into(),
                reason: format!("not a valid port number: {raw}"),
            }),
    }
}
