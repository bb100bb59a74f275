pub mod database;

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Origin wildcard accepted in `CORS_ORIGINS`.
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the database named in `url` when set.
    pub name: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(url) = non_empty(lookup, "DATABASE_URL") else {
            return Ok(None);
        };

        let max_connections: u32 = parse_or(lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        ensure!(
            max_connections > 0,
            "invalid value for DATABASE_MAX_CONNECTIONS: pool size must be at least 1"
        );

        Ok(Some(Self {
            url,
            name: non_empty(lookup, "DATABASE_NAME"),
            max_connections,
            acquire_timeout: Duration::from_secs(parse_or(lookup, "DATABASE_TIMEOUT_SECS", 5)?),
        }))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    /// `None` when `DATABASE_URL` is not set; the service still starts.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| ANY_ORIGIN.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: parse_or(&lookup, "PORT", 8000)?,
            cors_origins,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
