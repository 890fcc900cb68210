//! Response definitions
//!
//! Represents a validated reply from the controller.

use super::command::RELAY_COUNT;

/// A decoded 7-byte response frame
///
/// Frames returned by `decode_response` carry `PROTOCOL_IDENTIFIER_RESPONSE`
/// and `RESPONSE_CODE_OK` in `protocol_id` and `response_code`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseFrame {
    /// Protocol identifier
    pub protocol_id: u8,

    /// Response code
    pub response_code: u8,

    /// Relay status echoed by the controller
    pub relay_status: u8,

    /// Current temperature; NaN and infinities pass through untouched
    pub temperature: f32,
}

impl ResponseFrame {
    /// Whether the controller reports relay `index` as switched on.
    ///
    /// Returns `None` for an index this protocol revision cannot address.
    pub fn relay_on(&self, index: usize) -> Option<bool> {
        if index >= RELAY_COUNT {
            return None;
        }
        Some(self.relay_status & (1 << index) != 0)
    }
}
