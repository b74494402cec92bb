//! Pin numbering.
//!
//! Pins are numbered globally across ports, sixteen to a port: `PA0` is 0,
//! `PB0` is 16, `PC13` is 45.

use core::fmt;

/// Number of pins on each GPIO port.
pub const PINS_PER_PORT: u8 = 16;

/// A GPIO port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Port {
    pub const fn from_index(index: u8) -> Option<Port> {
        match index {
            0 => Some(Port::A),
            1 => Some(Port::B),
            2 => Some(Port::C),
            3 => Some(Port::D),
            _ => None,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A physical pin, identified by its global pin number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinNumber(u8);

impl PinNumber {
    /// Build a pin number from a port and a bit position on that port.
    ///
    /// `bit` must be below 16. Release builds take it modulo 16; use
    /// [`PinNumber::try_new`] for bits that are not known to be valid.
    pub const fn new(port: Port, bit: u8) -> Self {
        debug_assert!(bit < PINS_PER_PORT);
        PinNumber(port.index() * PINS_PER_PORT + bit % PINS_PER_PORT)
    }

    pub const fn try_new(port: Port, bit: u8) -> Option<Self> {
        if bit >= PINS_PER_PORT {
            return None;
        }
        Some(PinNumber(port.index() * PINS_PER_PORT + bit))
    }

    /// Decode a raw pin number. Fails for numbers past the last port.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw >= (PINS_PER_PORT as u32) * 4 {
            return None;
        }
        Some(PinNumber(raw as u8))
    }

    pub const fn raw(self) -> u32 {
        self.0 as u32
    }

    pub const fn port(self) -> Port {
        match Port::from_index(self.0 / PINS_PER_PORT) {
            Some(port) => port,
            // Unreachable, both constructors bound the number.
            None => Port::D,
        }
    }

    /// Bit position within the port.
    pub const fn bit(self) -> u8 {
        self.0 % PINS_PER_PORT
    }

    /// Single-bit mask for this pin within its port registers.
    pub const fn mask(self) -> u32 {
        1 << self.bit()
    }
}

impl fmt::Display for PinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port().letter(), self.bit())
    }
}
