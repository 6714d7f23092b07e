//! Server configuration read from the process environment.

use argon2::password_hash::PasswordHash;
use thiserror::Error;

/// Minimum length of a supplied `SECRET_KEY`.
pub const MIN_SECRET_KEY_BYTES: usize = 64;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ADMIN_PASSWORD_HASH environment variable not set")]
    MissingPasswordHash,
    #[error("ADMIN_PASSWORD_HASH is not a valid PHC string: {0}")]
    InvalidPasswordHash(String),
    #[error("SECRET_KEY must be at least {MIN_SECRET_KEY_BYTES} bytes, got {0}")]
    SecretKeyTooShort(usize),
}

/// Username and Argon2 hash the login endpoint checks against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

/// Settings for the HTTP server binary.
///
/// | Variable              | Default            |
/// |-----------------------|--------------------|
/// | `DATABASE_URL`        | `app.db`           |
/// | `ADDRESS`             | `127.0.0.1`        |
/// | `PORT`                | `8080`             |
/// | `SECRET_KEY`          | generated          |
/// | `ADMIN_USERNAME`      | `admin`            |
/// | `ADMIN_PASSWORD_HASH` | required           |
/// | `COOKIE_SECURE`       | `false`            |
/// | `SESSION_TTL_SECS`    | `86400`            |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// `None` means a fresh key is generated at startup.
    pub secret_key: Option<String>,
    pub admin: AdminCredentials,
    pub cookie_secure: bool,
    pub session_ttl_secs: u64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let address = lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let secret_key = lookup("SECRET_KEY").filter(|value| !value.is_empty());
        match secret_key.as_ref().map(String::len) {
            Some(length) if length < MIN_SECRET_KEY_BYTES => {
                return Err(ConfigError::SecretKeyTooShort(length));
            }
            _ => {}
        }

        let username = lookup("ADMIN_USERNAME")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());
        let password_hash = lookup("ADMIN_PASSWORD_HASH")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingPasswordHash)?;
        PasswordHash::new(&password_hash)
            .map_err(|err| ConfigError::InvalidPasswordHash(err.to_string()))?;

        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let session_ttl_secs = lookup("SESSION_TTL_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        Ok(Self {
            database_url,
            address,
            port,
            secret_key,
            admin: AdminCredentials {
                username,
                password_hash,
            },
            cookie_secure,
            session_ttl_secs,
        })
    }
}
