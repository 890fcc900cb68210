//! Relay command definitions
//!
//! Represents the desired relay states sent to the controller.

/// Number of relays addressable by this protocol revision
pub const RELAY_COUNT: usize = 2;

/// Desired state of both relays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelayCommand {
    /// Relay 0 on/off
    pub relay0: bool,

    /// Relay 1 on/off
    pub relay1: bool,
}

impl RelayCommand {
    pub fn new(relay0: bool, relay1: bool) -> Self {
        Self { relay0, relay1 }
    }

    /// Bitmask sent on the wire: bit 0 = relay0, bit 1 = relay1
    pub fn mask(&self) -> u8 {
        nth_bit(0, self.relay0) | nth_bit(1, self.relay1)
    }

    /// Build a command from a bitmask. Bits above bit 1 are ignored.
    pub fn from_mask(mask: u8) -> Self {
        Self {
            relay0: mask & 0b01 != 0,
            relay1: mask & 0b10 != 0,
        }
    }
}

fn nth_bit(n: u8, is_set: bool) -> u8 {
    if is_set {
        1 << n
    } else {
        0
    }
}
