//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┐
//! │ Id (1)   │ Mask (1) │
//! └──────────┴──────────┘
//! ```
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬───────────┬──────────────────────┐
//! │ Id (1)   │ Code (1) │ Relays (1)│ Temperature (4, f32) │
//! └──────────┴──────────┴───────────┴──────────────────────┘
//! ```
//!
//! The temperature is an IEEE-754 single, little-endian.

use bytes::Buf;

use crate::error::DecodeError;
use super::{RelayCommand, ResponseFrame};

/// Request size: 1 byte protocol id + 1 byte relay mask
pub const REQUEST_SIZE: usize = 2;

/// Response size: id + code + relay status + 4-byte float
pub const RESPONSE_SIZE: usize = 7;

/// Leading byte of every request frame
pub const PROTOCOL_IDENTIFIER_REQUEST: u8 = 0x00;

/// Leading byte of every response frame
pub const PROTOCOL_IDENTIFIER_RESPONSE: u8 = 0x7F;

/// Response code signalling success
pub const RESPONSE_CODE_OK: u8 = 0x00;

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a relay command to a request frame
///
/// Format: protocol_id (1) + relay_mask (1)
pub fn encode_request(command: &RelayCommand) -> [u8; REQUEST_SIZE] {
    [PROTOCOL_IDENTIFIER_REQUEST, command.mask()]
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode and validate a response frame
///
/// Checks run in a fixed order: length, then protocol identifier, then
/// response code. A foreign frame is reported as a protocol mismatch even if
/// its second byte is not `RESPONSE_CODE_OK`.
pub fn decode_response(raw: &[u8]) -> Result<ResponseFrame, DecodeError> {
    if raw.len() != RESPONSE_SIZE {
        return Err(DecodeError::Length {
            expected: RESPONSE_SIZE,
            actual: raw.len(),
        });
    }

    let mut buf = raw;
    let protocol_id = buf.get_u8();
    let response_code = buf.get_u8();
    let relay_status = buf.get_u8();
    let temperature = buf.get_f32_le();

    tracing::debug!(
        "parsed response ({:#04x}, {:#04x}, {:#04x}, {})",
        protocol_id,
        response_code,
        relay_status,
        temperature
    );

    if protocol_id != PROTOCOL_IDENTIFIER_RESPONSE {
        return Err(DecodeError::ProtocolMismatch {
            expected: PROTOCOL_IDENTIFIER_RESPONSE,
            actual: protocol_id,
        });
    }

    if response_code != RESPONSE_CODE_OK {
        return Err(DecodeError::ResponseNotOk {
            code: response_code,
        });
    }

    Ok(ResponseFrame {
        protocol_id,
        response_code,
        relay_status,
        temperature,
    })
}

/// Format bytes as a single `0x`-prefixed lowercase hex string
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
