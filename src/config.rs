use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Fallback signing secret. Only suitable for local development.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:8000,https://akashbv6680.github.io";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Either an explicit allow-list or any origin. Credentials are never
/// allowed, so the two are never combined.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.contains(&"*") {
            return Ok(CorsOrigins::Any);
        }

        let origins = entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                    key: "CORS_ALLOWED_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsOrigins::List(origins))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub cors_origins: CorsOrigins,
    pub require_auth: bool,
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            database_url: "demoapp.db".to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_days: 7,
            cors_origins: CorsOrigins::parse(DEFAULT_CORS_ORIGINS)
                .unwrap_or(CorsOrigins::List(Vec::new())),
            require_auth: false,
            max_body_bytes: 25 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => CorsOrigins::parse(&raw)?,
            None => defaults.cors_origins,
        };

        let require_auth = match lookup("REQUIRE_AUTH") {
            Some(raw) => parse_bool("REQUIRE_AUTH", &raw)?,
            None => defaults.require_auth,
        };

        let token_ttl_days = parse_var(&lookup, "TOKEN_TTL_DAYS", defaults.token_ttl_days)?;
        if token_ttl_days <= 0 || ttl_from_days(token_ttl_days).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_DAYS",
                value: token_ttl_days.to_string(),
            });
        }

        Ok(Self {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            jwt_secret: lookup("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_ttl_days,
            cors_origins,
            require_auth,
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }

    /// Saturates for lifetimes `from_lookup` would reject; signing then
    /// fails with an error instead of a panic.
    pub fn token_ttl(&self) -> Duration {
        Duration::try_days(self.token_ttl_days).unwrap_or(Duration::MAX)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// A lifetime is usable only if an expiry computed from now stays within
/// chrono's date range.
fn ttl_from_days(days: i64) -> Option<Duration> {
    Duration::try_days(days).filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
