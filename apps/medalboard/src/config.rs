//! Server configuration.
//!
//! Values come from the environment first, then CLI flags override them.
//!
//! | Variable                 | Default             |
//! |--------------------------|---------------------|
//! | `MEDALBOARD_ADDR`        | `127.0.0.1:8080`    |
//! | `MEDALBOARD_DATA`        | `data/olympic.json` |
//! | `MEDALBOARD_CORS_ORIGINS`| (none)              |

use crate::error::AppError;
use crate::source::DataSource;
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA: &str = "data/olympic.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub data: DataSource,
    /// Origins allowed to call the JSON API from a browser. Empty disables CORS.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let raw_addr = lookup("MEDALBOARD_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|_| AppError::InvalidArgument(format!("MEDALBOARD_ADDR: {raw_addr}")))?;

        let data = lookup("MEDALBOARD_DATA").unwrap_or_else(|| DEFAULT_DATA.to_string());

        let cors_origins = lookup("MEDALBOARD_CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            addr,
            data: DataSource::parse(&data),
            cors_origins,
        })
    }

    /// Apply CLI flags on top.
    #[must_use]
    pub fn with_overrides(mut self, addr: Option<SocketAddr>, data: Option<&str>) -> Self {
        if let Some(addr) = addr {
            self.addr = addr;
        }
        if let Some(data) = data {
            self.data = DataSource::parse(data);
        }
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
