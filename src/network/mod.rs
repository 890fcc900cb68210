//! Network Module
//!
//! TCP exchange with the controller.
//!
//! ## Architecture
//! - One connection per request, opened and closed inside `exchange`
//! - Blocking I/O on the calling thread
//! - No retries: every failure is terminal for the exchange

mod transport;

pub use transport::{exchange, Transport};
