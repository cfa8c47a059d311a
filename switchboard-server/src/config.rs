use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 3001;

/// Server configuration, read from the environment:
///
/// - `PORT` — listen port (default 3001)
/// - `CORS_ORIGIN` — allowed origin for the HTTP surface; `*` or unset
///   allows any origin
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub port: Option<u16>,
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => Some(raw.parse().context("invalid PORT")?),
            Err(_) => None,
        };
        let cors_origin = match env::var("CORS_ORIGIN") {
            Ok(raw) if raw != "*" => Some(raw.parse().context("invalid CORS_ORIGIN")?),
            _ => None,
        };
        Ok(Self { port, cors_origin })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port.unwrap_or(DEFAULT_PORT)))
    }
}
