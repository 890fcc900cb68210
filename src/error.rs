//! Error types for the kepu client
//!
//! Two layered taxonomies, one per component, wrapped by a unified error.

use thiserror::Error;

/// Result type alias using KepuError
pub type Result<T> = std::result::Result<T, KepuError>;

/// Unified error type for kepu operations
#[derive(Debug, Error)]
pub enum KepuError {
    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures while exchanging bytes with the controller.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, timed out, or the host could not be resolved
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The request could not be written in full
    #[error("failed to send request: {source}")]
    Send {
        #[source]
        source: std::io::Error,
    },

    /// The single read of the reply failed
    #[error("failed to receive response: {source}")]
    Receive {
        #[source]
        source: std::io::Error,
    },
}

/// Failures while validating a response frame.
///
/// Variants are ordered the way `decode_response` checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid response length (got {actual} bytes, expected {expected})")]
    Length { expected: usize, actual: usize },

    #[error("invalid protocol identifier (got {actual:#04x}, expected {expected:#04x})")]
    ProtocolMismatch { expected: u8, actual: u8 },

    #[error("response not ok (got code {code:#04x})")]
    ResponseNotOk { code: u8 },
}
