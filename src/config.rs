use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_MOVIE_INDEX: &str = "movies";
pub const DEFAULT_PASSTHROUGH_URL: &str = "https://www.google.com/ncr";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Port and path prefix the document store is exposed on behind the load balancer.
const DB_PORT: u16 = 8082;
const DB_PATH: &str = "db";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the document store, e.g. `http://10.0.0.5:8082/db`.
    pub db_addr: String,
    pub movie_index: String,
    pub passthrough_url: String,
    pub bind_addr: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_addr = match get_env_opt(&lookup, "DB_ADDR") {
            Some(addr) => addr.trim_end_matches('/').to_string(),
            None => {
                let host = get_env(&lookup, "LOAD_BALANCER_IP")?;
                format!("http://{host}:{DB_PORT}/{DB_PATH}")
            }
        };

        let timeout_secs = match get_env_opt(&lookup, "REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            db_addr,
            movie_index: get_env_or_default(&lookup, "MOVIE_INDEX", DEFAULT_MOVIE_INDEX),
            passthrough_url: get_env_or_default(&lookup, "PASSTHROUGH_URL", DEFAULT_PASSTHROUGH_URL),
            bind_addr: get_env_or_default(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn get_env<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    get_env_opt(lookup, key).with_context(|| format!("Missing required environment variable: {key}"))
}

fn get_env_opt<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_env_opt(lookup, key).unwrap_or_else(|| default.to_string())
}
