//! Credential loading.
//!
//! The API client itself is configured through
//! [`SmartMeClientBuilder`](crate::api::SmartMeClientBuilder); this module only
//! locates the username/password pair, either in the environment or in a small
//! JSON file:
//!
//! ```json
//! { "username": "me@example.com", "password": "secret" }
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the username.
pub const USERNAME_ENV: &str = "SMARTME_USERNAME";

/// Environment variable holding the password.
pub const PASSWORD_ENV: &str = "SMARTME_PASSWORD";

/// File name of the credentials file in the user's home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".smartme-client-config.json";

/// Errors raised while loading credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// No home directory could be determined
    #[error("home directory not found")]
    NoHomeDir,

    /// The credentials file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Username/password pair for HTTP Basic authentication.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Account username (usually an e-mail address)
    pub username: String,
    /// Account password
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read [`USERNAME_ENV`] and [`PASSWORD_ENV`].
    ///
    /// A missing password is treated as empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = env::var(USERNAME_ENV).map_err(|_| ConfigError::MissingEnv(USERNAME_ENV))?;
        let password = env::var(PASSWORD_ENV).unwrap_or_default();
        Ok(Self { username, password })
    }

    /// Read credentials from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `~/.smartme-client-config.json`.
    pub fn from_default_file() -> Result<Self, ConfigError> {
        Self::from_file(default_config_path()?)
    }

    /// Whether both username and password are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Location of the default credentials file.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    home::home_dir()
        .map(|home| home.join(DEFAULT_CONFIG_FILE))
        .ok_or(ConfigError::NoHomeDir)
}
