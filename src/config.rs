//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function so tests can feed a map instead of
//! mutating process-wide environment state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::services::session::MAX_SESSION_TTL;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the console server.
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Console login name.
    pub username: String,
    /// Console login password.
    pub password: String,
    /// Lifetime of an issued session token.
    pub session_ttl: Duration,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let username = required("MCDASH_USERNAME", lookup("MCDASH_USERNAME"))?;
        let password = required("MCDASH_PASSWORD", lookup("MCDASH_PASSWORD"))?;
        let raw_ttl = lookup("SESSION_TTL_SECS");
        let ttl_secs = parse_or("SESSION_TTL_SECS", raw_ttl.clone(), DEFAULT_SESSION_TTL_SECS)?;
        if ttl_secs > MAX_SESSION_TTL.as_secs() {
            return Err(ConfigError::Invalid { key: "SESSION_TTL_SECS", value: raw_ttl.unwrap_or_default() });
        }

        Ok(Self { port, username, password, session_ttl: Duration::from_secs(ttl_secs) })
    }
}

fn required(key: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
