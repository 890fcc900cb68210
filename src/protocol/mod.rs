//! Protocol Module
//!
//! Defines the wire protocol spoken with the controller.
//!
//! ## Protocol Format (single revision, no negotiation)
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────┐
//! │ 0x00 (1) │ Mask (1) │
//! └──────────┴──────────┘
//! ```
//!
//! ### Relay Mask
//! - bit 0: relay0
//! - bit 1: relay1
//! - bits 2-7: zero
//!
//! ### Response Format
//! ```text
//! ┌──────────┬──────────┬───────────┬──────────────────────┐
//! │ 0x7F (1) │ Code (1) │ Relays (1)│ Temperature (4, f32) │
//! └──────────┴──────────┴───────────┴──────────────────────┘
//! ```
//!
//! ### Response Codes
//! - 0x00: OK
//! - anything else: failure reported by the controller

mod command;
mod response;
mod codec;

pub use command::{RelayCommand, RELAY_COUNT};
pub use response::ResponseFrame;
pub use codec::{
    encode_request, decode_response, hex_bytes,
    REQUEST_SIZE, RESPONSE_SIZE,
    PROTOCOL_IDENTIFIER_REQUEST, PROTOCOL_IDENTIFIER_RESPONSE, RESPONSE_CODE_OK,
};
