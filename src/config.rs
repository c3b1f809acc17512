//! Runtime configuration.
//!
//! A single runtime-mode switch (`PAWHUB_ENV`) selects the connection
//! profile; `DATABASE_URL` overrides either profile's default. Everything
//! else is flags on the binary.

use std::env;
use std::net::SocketAddr;

/// Runtime profile selecting the store connection defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    /// Read the profile from `PAWHUB_ENV`. Anything other than
    /// "production" (including unset) means development.
    pub fn from_env() -> Self {
        match env::var("PAWHUB_ENV").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    fn default_database_url(&self) -> &'static str {
        match self {
            Self::Development => "postgres://localhost/pawhub_dev",
            Self::Production => "postgres://localhost/pawhub",
        }
    }

    /// Resolve the connection string: `DATABASE_URL` wins, otherwise the
    /// profile default.
    pub fn database_url(&self) -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| self.default_database_url().to_string())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:4000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            cors_permissive: false,
        }
    }
}
