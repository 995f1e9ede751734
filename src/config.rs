//! Startup configuration, from command-line flags with environment fallbacks.

use crate::events::DEFAULT_EVENT_CAPACITY;
use crate::model::{default_seed, ResourceCreate};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_PATH: &str = "/graphql";
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroCapacity(&'static str),

    #[error("endpoint path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "resource-feed", version, about = "Serve an in-memory resource catalogue over GraphQL")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "RESOURCE_FEED_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "RESOURCE_FEED_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path serving GraphQL over HTTP (POST) and WebSocket (GET upgrade).
    #[arg(long, env = "RESOURCE_FEED_PATH", default_value = DEFAULT_PATH)]
    pub path: String,

    /// Events buffered per listener before a slow listener starts skipping.
    #[arg(long, env = "RESOURCE_FEED_EVENT_CAPACITY", default_value_t = DEFAULT_EVENT_CAPACITY)]
    pub event_capacity: usize,

    /// Pending requests the store actor queues before callers wait.
    #[arg(long, env = "RESOURCE_FEED_MAILBOX_SIZE", default_value_t = DEFAULT_MAILBOX_SIZE)]
    pub mailbox_size: usize,

    /// JSON array of `{ "name", "type", "region" }` replacing the built-in seed records.
    #[arg(long, env = "RESOURCE_FEED_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            seed_file: None,
        }
    }
}

/// The subset of configuration the store and event channel need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    pub mailbox_size: usize,
    pub event_capacity: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreSettings {
    /// Tokio channels panic on zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("event_capacity"));
        }
        if self.mailbox_size == 0 {
            return Err(ConfigError::ZeroCapacity("mailbox_size"));
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            mailbox_size: self.mailbox_size,
            event_capacity: self.event_capacity,
        }
    }

    /// Rejects values the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store_settings().validate()?;
        if !self.path.starts_with('/') {
            return Err(ConfigError::InvalidPath(self.path.clone()));
        }
        Ok(())
    }

    /// Records to preload: the seed file when configured, the built-in pair otherwise.
    pub fn load_seed(&self) -> Result<Vec<ResourceCreate>, ConfigError> {
        let Some(path) = &self.seed_file else {
            return Ok(default_seed());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
            path: path.clone(),
            source,
        })
    }
}
