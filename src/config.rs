use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{validation_error, Error};

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,
    pub kakao_api_base: String,
    pub kakao_rest_key: String,
    pub kakao_timeout: Duration,
    pub frontend_url: String,
    pub cache_purge_interval: Duration,
}

impl Config {
    /// Reads configuration from the process environment, after loading a
    /// `.env` file if one is present.
    pub fn from_env() -> Result<Self, Error> {
        if dotenv::dotenv().is_err() {
            tracing::debug!("no .env file loaded");
        }

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Self {
            addr: parse_or(&lookup, "MIDPOINT_ADDR", "127.0.0.1:3001")?,
            database_url: lookup("DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", "5")?,
            kakao_api_base: lookup("KAKAO_API_BASE").unwrap_or_else(|_| "dapi.kakao.com".into()),
            kakao_rest_key: lookup("KAKAO_REST_KEY")?,
            kakao_timeout: Duration::from_millis(parse_or(&lookup, "KAKAO_TIMEOUT_MS", "10000")?),
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cache_purge_interval: Duration::from_secs(parse_or(
                &lookup,
                "CACHE_PURGE_INTERVAL_SECS",
                "60",
            )?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|_| {
        tracing::info!("{} not set, using default: {}", key, default);
        default.to_string()
    });

    raw.parse()
        .map_err(|e| validation_error("invalid configuration", format!("{}: {}", key, e)))
}
