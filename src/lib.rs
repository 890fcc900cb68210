//! # kepu
//!
//! Client for the kitchen garden controller, a small embedded device with:
//! - Two on/off relays
//! - One temperature sensor
//! - A fixed-layout binary protocol over TCP
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Client                                │
//! │            (encode → exchange → decode)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │  Transport  │
//!   │  (Codec)    │          │  (TCP, 1x)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │ Controller  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, KepuError, Result, TransportError};
pub use config::Config;
pub use client::{exit_code, process, Client, Reading};
pub use protocol::{RelayCommand, ResponseFrame};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kepu
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
