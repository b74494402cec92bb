//! LED and button access by logical index.
//!
//! [`Board`] owns the port driving the LEDs and the port reading the
//! buttons. LED changes are written through the set/clear registers, so
//! changing one LED never rewrites the rest of the port.

use core::convert::Infallible;

use bitflags::bitflags;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use heapless::Vec;

use crate::board::{BoardConfig, MAX_PINS};
use crate::error::BspError;
use crate::hardware::traits::{Button, GpioPort, Led};
use crate::log::{debug, info, warn};
use crate::pin::{PinNumber, Port};

/// Returned by the `_raw` lookups for a pin that is not an LED or button.
pub const INVALID_INDEX: u32 = 0xFFFF_FFFF;

bitflags! {
    /// What [`Board::init`] sets up.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InitFlags: u32 {
        const LEDS = 1 << 0;
        const BUTTONS = 1 << 1;
    }
}

pub struct Board<L, B> {
    config: BoardConfig,
    leds: L,
    buttons: B,
}

impl<L: GpioPort, B: GpioPort> Board<L, B> {
    /// Bind a configuration to its ports. The pins are left untouched until
    /// [`Board::init`].
    pub fn new(config: BoardConfig, leds: L, buttons: B) -> Result<Self, BspError> {
        config.validate()?;
        info!(
            "board {}: {} leds, {} buttons",
            config.name,
            config.led_count(),
            config.button_count()
        );
        Ok(Board {
            config,
            leds,
            buttons,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn led_port(&self) -> &L {
        &self.leds
    }

    pub fn led_port_mut(&mut self) -> &mut L {
        &mut self.leds
    }

    pub fn button_port(&self) -> &B {
        &self.buttons
    }

    pub fn button_port_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Give the ports back.
    pub fn release(self) -> (L, B) {
        (self.leds, self.buttons)
    }

    pub fn init(&mut self, flags: InitFlags) {
        if flags.contains(InitFlags::LEDS) {
            self.leds_init();
        }
        if flags.contains(InitFlags::BUTTONS) {
            self.buttons_init();
        }
    }

    pub fn led_count(&self) -> usize {
        self.config.led_count()
    }

    pub fn button_count(&self) -> usize {
        self.config.button_count()
    }

    pub fn leds_mask(&self) -> u32 {
        self.config.leds_mask()
    }

    pub fn buttons_mask(&self) -> u32 {
        self.config.buttons_mask()
    }

    fn led_mask(&self, led_idx: usize) -> Result<u32, BspError> {
        match self.config.leds.get(led_idx) {
            Some(&bit) => Ok(1 << bit),
            None => {
                warn!("no led {}", led_idx);
                Err(BspError::InvalidLed(led_idx))
            }
        }
    }

    fn button_mask(&self, button_idx: usize) -> Result<u32, BspError> {
        match self.config.buttons.get(button_idx) {
            Some(&bit) => Ok(1 << bit),
            None => {
                warn!("no button {}", button_idx);
                Err(BspError::InvalidButton(button_idx))
            }
        }
    }

    // LEDs.

    /// Whether LED `led_idx` is lit.
    pub fn led_state_get(&self, led_idx: usize) -> Result<bool, BspError> {
        let mask = self.led_mask(led_idx)?;
        Ok(self.led_is_on_mask(mask) != 0)
    }

    pub fn led_on(&mut self, led_idx: usize) -> Result<(), BspError> {
        let mask = self.led_mask(led_idx)?;
        debug!("led {} on", led_idx);
        self.leds_on_mask(mask);
        Ok(())
    }

    pub fn led_off(&mut self, led_idx: usize) -> Result<(), BspError> {
        let mask = self.led_mask(led_idx)?;
        debug!("led {} off", led_idx);
        self.leds_off_mask(mask);
        Ok(())
    }

    pub fn led_invert(&mut self, led_idx: usize) -> Result<(), BspError> {
        let mask = self.led_mask(led_idx)?;
        debug!("led {} invert", led_idx);
        self.leds_invert_mask(mask);
        Ok(())
    }

    pub fn leds_on(&mut self) {
        self.leds_on_mask(self.leds_mask());
    }

    pub fn leds_off(&mut self) {
        self.leds_off_mask(self.leds_mask());
    }

    /// Make every LED pin an output and switch all LEDs off.
    pub fn leds_init(&mut self) {
        self.leds_configure(self.leds_mask());
        self.leds_off();
        info!("leds ready on port {}", self.config.led_port);
    }

    /// Index of the LED on `pin`, if there is one.
    pub fn pin_to_led_idx(&self, pin: u32) -> Option<usize> {
        position(self.config.led_port, self.config.leds, pin)
    }

    /// As [`Board::pin_to_led_idx`], with [`INVALID_INDEX`] for no LED.
    pub fn pin_to_led_idx_raw(&self, pin: u32) -> u32 {
        index_or_invalid(self.pin_to_led_idx(pin))
    }

    pub fn led_idx_to_pin(&self, led_idx: usize) -> Result<PinNumber, BspError> {
        self.led_mask(led_idx)?;
        self.config
            .led_pin(led_idx)
            .ok_or(BspError::InvalidLed(led_idx))
    }

    // Buttons.

    /// Whether button `button_idx` is held down.
    pub fn button_state_get(&self, button_idx: usize) -> Result<bool, BspError> {
        let mask = self.button_mask(button_idx)?;
        Ok(self.buttons_pressed_mask() & mask != 0)
    }

    /// Make every button pin an input with the board's pull.
    pub fn buttons_init(&mut self) {
        let pull = self.config.button_pull;
        for &bit in self.config.buttons {
            self.buttons.configure_input(bit, pull);
        }
        info!("buttons ready on port {}", self.config.button_port);
    }

    pub fn pin_to_button_idx(&self, pin: u32) -> Option<usize> {
        position(self.config.button_port, self.config.buttons, pin)
    }

    /// As [`Board::pin_to_button_idx`], with [`INVALID_INDEX`] for no button.
    pub fn pin_to_button_idx_raw(&self, pin: u32) -> u32 {
        index_or_invalid(self.pin_to_button_idx(pin))
    }

    pub fn button_idx_to_pin(&self, button_idx: usize) -> Result<PinNumber, BspError> {
        self.button_mask(button_idx)?;
        self.config
            .button_pin(button_idx)
            .ok_or(BspError::InvalidButton(button_idx))
    }

    /// Port mask of the buttons currently held down.
    pub fn buttons_pressed_mask(&self) -> u32 {
        let levels = self.buttons.input();
        let pressed = if self.config.buttons_active_low {
            !levels
        } else {
            levels
        };
        pressed & self.buttons_mask()
    }

    /// Indices of the buttons currently held down, lowest first.
    pub fn pressed_buttons(&self) -> Vec<usize, MAX_PINS> {
        let pressed = self.buttons_pressed_mask();
        self.config
            .buttons
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| pressed & (1 << bit) != 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    // Masks. All masks are relative to the LED port.

    /// Light the LEDs in `mask`. Bits that are not LEDs are ignored.
    pub fn leds_on_mask(&mut self, mask: u32) {
        let mask = mask & self.leds_mask();
        let inv = self.config.leds_inv_mask;
        self.leds.out_clr(mask & inv);
        self.leds.out_set(mask & !inv);
    }

    /// Darken the LEDs in `mask`. Bits that are not LEDs are ignored.
    pub fn leds_off_mask(&mut self, mask: u32) {
        let mask = mask & self.leds_mask();
        let inv = self.config.leds_inv_mask;
        self.leds.out_set(mask & inv);
        self.leds.out_clr(mask & !inv);
    }

    /// The bits of `mask` whose LED is lit.
    pub fn led_is_on_mask(&self, mask: u32) -> u32 {
        mask & (self.leds.out() ^ self.config.leds_inv_mask)
    }

    /// Flip the LEDs in `mask`. Bits that are not LEDs are ignored.
    pub fn leds_invert_mask(&mut self, mask: u32) {
        let mask = mask & self.leds_mask();
        let state = self.leds.out();
        self.leds.out_set(mask & !state);
        self.leds.out_clr(mask & state);
    }

    /// Make every pin in `mask` on the LED port a push-pull output.
    pub fn leds_configure(&mut self, mask: u32) {
        for bit in 0..MAX_PINS as u8 {
            if mask & (1 << bit) != 0 {
                self.leds.configure_output(bit);
            }
        }
    }

    // Handles.

    pub fn led(&mut self, led_idx: usize) -> Result<BoardLed<'_, L, B>, BspError> {
        let mask = self.led_mask(led_idx)?;
        Ok(BoardLed { board: self, mask })
    }

    pub fn button(&self, button_idx: usize) -> Result<BoardButton<'_, L, B>, BspError> {
        let mask = self.button_mask(button_idx)?;
        Ok(BoardButton { board: self, mask })
    }
}

fn position(port: Port, bits: &[u8], pin: u32) -> Option<usize> {
    let pin = PinNumber::from_raw(pin)?;
    if pin.port() != port {
        return None;
    }
    bits.iter().position(|&bit| bit == pin.bit())
}

/// Flatten a lookup result to the raw index form.
pub fn index_or_invalid(index: Option<usize>) -> u32 {
    index.map_or(INVALID_INDEX, |idx| idx as u32)
}

/// One LED of a [`Board`].
///
/// As an `embedded-hal` pin, high means lit whatever the wiring.
pub struct BoardLed<'b, L, B> {
    board: &'b mut Board<L, B>,
    mask: u32,
}

impl<L: GpioPort, B: GpioPort> Led for BoardLed<'_, L, B> {
    fn on(&mut self) {
        self.board.leds_on_mask(self.mask);
    }

    fn off(&mut self) {
        self.board.leds_off_mask(self.mask);
    }

    fn toggle(&mut self) {
        self.board.leds_invert_mask(self.mask);
    }

    fn is_on(&self) -> bool {
        self.board.led_is_on_mask(self.mask) != 0
    }
}

impl<L: GpioPort, B: GpioPort> ErrorType for BoardLed<'_, L, B> {
    type Error = Infallible;
}

impl<L: GpioPort, B: GpioPort> OutputPin for BoardLed<'_, L, B> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.off();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on();
        Ok(())
    }
}

impl<L: GpioPort, B: GpioPort> StatefulOutputPin for BoardLed<'_, L, B> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_on())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_on())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Led::toggle(self);
        Ok(())
    }
}

/// One button of a [`Board`].
///
/// As an `embedded-hal` pin, high means pressed whatever the wiring.
pub struct BoardButton<'b, L, B> {
    board: &'b Board<L, B>,
    mask: u32,
}

impl<L: GpioPort, B: GpioPort> Button for BoardButton<'_, L, B> {
    fn is_pressed(&self) -> bool {
        self.board.buttons_pressed_mask() & self.mask != 0
    }
}

impl<L: GpioPort, B: GpioPort> ErrorType for BoardButton<'_, L, B> {
    type Error = Infallible;
}

impl<L: GpioPort, B: GpioPort> InputPin for BoardButton<'_, L, B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_pressed())
    }
}
