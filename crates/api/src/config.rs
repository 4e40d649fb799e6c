use std::net::IpAddr;

use axum::http::HeaderValue;

/// A malformed configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against the
/// drawing client's dev server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection URL.
    pub database_url: String,
    /// Insert the demo accounts at startup (default: `true`).
    pub seed_demo_users: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `8080`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `DATABASE_URL`         | `sqlite://easel.db?mode=rwc` |
    /// | `SEED_DEMO_USERS`      | `true`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse("HOST", "an IP address", var("HOST", "0.0.0.0"))?;
        let port = parse("PORT", "a valid u16", var("PORT", "8080"))?;
        let request_timeout_secs = parse(
            "REQUEST_TIMEOUT_SECS",
            "a valid u64",
            var("REQUEST_TIMEOUT_SECS", "30"),
        )?;
        let seed_demo_users = parse(
            "SEED_DEMO_USERS",
            "true or false",
            var("SEED_DEMO_USERS", "true"),
        )?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url: var("DATABASE_URL", "sqlite://easel.db?mode=rwc"),
            seed_demo_users,
        })
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
