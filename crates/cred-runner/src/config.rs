//! Credential resolution: merges command-line values with environment
//! variables and validates that both credentials are present.

use std::fmt;

use thiserror::Error;

/// Environment variable consulted when `--client_id` is absent or empty.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";

/// Environment variable consulted when `--client_secret` is absent or empty.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Errors from credential resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the flag nor the environment supplied a client id.
    #[error("client id required; set --client_id or the CLIENT_ID environment variable")]
    MissingClientId,

    /// Neither the flag nor the environment supplied a client secret.
    #[error("client secret required; set --client_secret or the CLIENT_SECRET environment variable")]
    MissingClientSecret,
}

/// A confidential credential value. `Debug` output is redacted so derived
/// formatting and log events never leak the secret material.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Returns the underlying secret material.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([redacted])")
    }
}

/// Validated configuration. Both fields are non-empty once resolution
/// succeeds, and the values stay fixed for the rest of the process.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub client_id: String,
    pub client_secret: Secret,
}

impl ResolvedConfig {
    /// Resolves both credentials, flag value first and environment second.
    ///
    /// The environment lookup is injected so resolution stays deterministic
    /// under test; `main` passes a `std::env::var`-backed lookup once at
    /// startup and the environment is never re-read afterwards.
    pub fn resolve<E>(
        client_id_flag: Option<String>,
        client_secret_flag: Option<String>,
        env: E,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let client_id = from_sources(client_id_flag, || env(CLIENT_ID_VAR))
            .ok_or(ConfigError::MissingClientId)?;
        let client_secret = from_sources(client_secret_flag, || env(CLIENT_SECRET_VAR))
            .ok_or(ConfigError::MissingClientSecret)?;

        Ok(ResolvedConfig {
            client_id,
            client_secret: Secret::from(client_secret),
        })
    }
}

/// Flag wins over environment; empty strings count as absent in both sources,
/// so an explicit `--client_id=""` still falls back to the environment.
fn from_sources(flag: Option<String>, env: impl FnOnce() -> Option<String>) -> Option<String> {
    flag.filter(|value| !value.is_empty())
        .or_else(|| env().filter(|value| !value.is_empty()))
}
