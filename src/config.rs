//! Configuration for the kepu client
//!
//! Centralized configuration with defaults matching the deployed controller.

use std::time::Duration;

use crate::error::{KepuError, Result};

/// Main configuration for one client invocation
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Controller Address
    // -------------------------------------------------------------------------
    /// Controller hostname or IPv4 address
    pub host: String,

    /// Controller TCP port
    pub port: u16,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Size of the buffer handed to the single receive call
    pub receive_bufsize: usize,

    /// Connect timeout (milliseconds); `None` blocks until the OS gives up
    pub connect_timeout_ms: Option<u64>,

    /// Socket read timeout (milliseconds, 0 = disabled)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = disabled)
    pub write_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "192.168.101.102".to_string(),
            port: 29500,
            receive_bufsize: 1024,
            connect_timeout_ms: None,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` string, used for logging and error context
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    /// Reject values that can never produce a valid exchange
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(KepuError::Config("host must not be empty".to_string()));
        }
        if self.receive_bufsize == 0 {
            return Err(KepuError::Config(
                "receive buffer size must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the controller host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the controller port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the receive buffer size (in bytes)
    pub fn receive_bufsize(mut self, size: usize) -> Self {
        self.config.receive_bufsize = size;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: Option<u64>) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
