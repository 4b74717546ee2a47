//! Runtime configuration, read once from the environment at startup.

use crate::error::ConfigError;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection descriptor for the target database. Required.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Read configuration from the environment (after loading `.env` if
    /// present). A missing `DATABASE_URL` is fatal; everything else has a
    /// default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnv("DATABASE_URL"))?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok())?;
        let db_max_connections =
            parse_max_connections(std::env::var("DB_MAX_CONNECTIONS").ok())?;
        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
        })
    }
}

fn parse_bind_addr(raw: Option<String>) -> Result<SocketAddr, ConfigError> {
    let raw = raw.unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
    raw.parse().map_err(|_| ConfigError::Invalid {
        name: "BIND_ADDR",
        message: format!("'{}' is not a socket address", raw),
    })
}

fn parse_max_connections(raw: Option<String>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_CONNECTIONS);
    };
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            name: "DB_MAX_CONNECTIONS",
            message: format!("'{}' is not a positive integer", raw),
        }),
    }
}
