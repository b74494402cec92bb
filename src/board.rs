//! Board definitions.
//!
//! A board is described by a static [`BoardConfig`]: which port carries the
//! LEDs and which the buttons, the bit of each, and how they are wired. The
//! position of a bit in its list is the logical index of that LED or button.

use crate::error::BspError;
use crate::hardware::traits::Pull;
use crate::pin::{PinNumber, Port, PINS_PER_PORT};

pub const LED_0: usize = 0;
pub const LED_1: usize = 1;

pub const BUTTON_0: usize = 0;
pub const BUTTON_1: usize = 1;

/// Upper bound on LEDs or buttons per board.
pub const MAX_PINS: usize = PINS_PER_PORT as usize;

#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    pub name: &'static str,

    /// Port all LEDs are on.
    pub led_port: Port,
    /// LED bits, in index order.
    pub leds: &'static [u8],
    /// LEDs that light when their output is low.
    pub leds_inv_mask: u32,

    /// Port all buttons are on.
    pub button_port: Port,
    /// Button bits, in index order.
    pub buttons: &'static [u8],
    pub button_pull: Pull,
    /// Whether a pressed button reads low.
    pub buttons_active_low: bool,
}

/// STM32F103C8 "Blue Pill".
///
/// The onboard LED on PC13 sinks current, so it is lit with the pin low. A
/// second LED on PC14 is wired to ground. Both buttons short to ground with
/// the internal pull-up enabled.
pub const BLUE_PILL: BoardConfig = BoardConfig {
    name: "blue-pill",
    led_port: Port::C,
    leds: &[13, 14],
    leds_inv_mask: 1 << 13,
    button_port: Port::B,
    buttons: &[1, 15],
    button_pull: Pull::Up,
    buttons_active_low: true,
};

const fn mask_of(bits: &[u8]) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < bits.len() {
        mask |= 1 << (bits[i] as u32 % 32);
        i += 1;
    }
    mask
}

impl BoardConfig {
    /// Mask of every LED bit on the LED port.
    pub const fn leds_mask(&self) -> u32 {
        mask_of(self.leds)
    }

    /// Mask of every button bit on the button port.
    pub const fn buttons_mask(&self) -> u32 {
        mask_of(self.buttons)
    }

    pub const fn led_count(&self) -> usize {
        self.leds.len()
    }

    pub const fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn led_pin(&self, led_idx: usize) -> Option<PinNumber> {
        self.leds
            .get(led_idx)
            .map(|&bit| PinNumber::new(self.led_port, bit))
    }

    pub fn button_pin(&self, button_idx: usize) -> Option<PinNumber> {
        self.buttons
            .get(button_idx)
            .map(|&bit| PinNumber::new(self.button_port, bit))
    }

    /// Check the pin lists can be driven: at most [`MAX_PINS`] entries, every
    /// bit on the port, no bit listed twice, and only LEDs inverted.
    pub fn validate(&self) -> Result<(), BspError> {
        check_bits(self.leds)?;
        check_bits(self.buttons)?;
        let stray = self.leds_inv_mask & !self.leds_mask();
        if stray != 0 {
            return Err(BspError::StrayInvertedBits(stray));
        }
        Ok(())
    }
}

fn check_bits(bits: &[u8]) -> Result<(), BspError> {
    if bits.len() > MAX_PINS {
        return Err(BspError::TooManyPins(bits.len()));
    }
    let mut seen = 0u32;
    for &bit in bits {
        if bit >= PINS_PER_PORT {
            return Err(BspError::PinOutOfRange(bit));
        }
        if seen & (1 << bit) != 0 {
            return Err(BspError::DuplicatePin(bit));
        }
        seen |= 1 << bit;
    }
    Ok(())
}
