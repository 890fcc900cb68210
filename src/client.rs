//! Client Module
//!
//! Drives one relay switch against the controller.
//!
//! ## Flow
//! 1. Encode the relay command into a request frame
//! 2. Exchange it over a fresh TCP connection
//! 3. Decode and validate the reply
//!
//! `Client::switch_relays` keeps the typed error for callers that want to
//! branch on it; `process` swallows it (after logging) and reports only
//! whether a reading was obtained.

use crate::config::Config;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{decode_response, encode_request, hex_bytes, RelayCommand, ResponseFrame};

/// Outcome of a successful exchange, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Relay status byte echoed by the controller
    pub relay_status: u8,

    /// Current temperature
    pub temperature: f32,
}

impl Reading {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Relays switched {:#x}. Current temperature {}",
            self.relay_status,
            format_temperature(self.temperature)
        )
    }
}

impl From<ResponseFrame> for Reading {
    fn from(frame: ResponseFrame) -> Self {
        Self {
            relay_status: frame.relay_status,
            temperature: frame.temperature,
        }
    }
}

/// Six decimals; non-finite values as `nan`, `inf` and `-inf`
fn format_temperature(temperature: f32) -> String {
    if temperature.is_nan() {
        "nan".to_string()
    } else if temperature == f32::INFINITY {
        "inf".to_string()
    } else if temperature == f32::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.6}", temperature)
    }
}

/// Client for the relay controller
pub struct Client {
    config: Config,
}

impl Client {
    /// Create a client, validating the config first
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Encode, exchange and decode one relay command
    pub fn switch_relays(&self, command: RelayCommand) -> Result<ResponseFrame> {
        let request = encode_request(&command);

        // A new transport per call; nothing is shared between exchanges
        let raw = Transport::from_config(&self.config).exchange(&request)?;

        match decode_response(&raw) {
            Ok(frame) => Ok(frame),
            Err(e) => {
                tracing::debug!("undecodable response: {}", hex_bytes(&raw));
                Err(e.into())
            }
        }
    }
}

/// Run one exchange and reduce the outcome to "reading or nothing"
///
/// Every error is logged here and never returned.
pub fn process(config: Config, command: RelayCommand) -> Option<Reading> {
    tracing::debug!("config: {:?}, command: {:?}", config, command);

    let result = Client::new(config).and_then(|client| client.switch_relays(command));
    match result {
        Ok(frame) => Some(frame.into()),
        Err(e) => {
            tracing::error!("exchange failed: {}", e);
            tracing::debug!("exchange error detail: {:?}", e);
            None
        }
    }
}

/// Process exit code for an outcome: 0 with a reading, 1 without
pub fn exit_code(reading: Option<&Reading>) -> i32 {
    match reading {
        Some(_) => 0,
        None => 1,
    }
}
