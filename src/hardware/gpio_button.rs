use super::traits::Button;
use embassy_stm32::gpio::Input;

/// A single button on an embassy [`Input`].
pub struct GpioButton<'d> {
    pin: Input<'d>,
    active_low: bool,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: Input<'d>, active_low: bool) -> Self {
        Self { pin, active_low }
    }
}

impl<'d> Button for GpioButton<'d> {
    fn is_pressed(&self) -> bool {
        self.pin.is_low() == self.active_low
    }
}
