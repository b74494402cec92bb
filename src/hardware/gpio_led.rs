use super::traits::Led;
use embassy_stm32::gpio::{Level, Output};

/// A single LED on an embassy [`Output`].
pub struct GpioLed<'d> {
    pin: Output<'d>,
    active_low: bool,
}

impl<'d> GpioLed<'d> {
    /// Take over `pin` and switch the LED off.
    pub fn new(pin: Output<'d>, active_low: bool) -> Self {
        let mut led = Self { pin, active_low };
        led.off();
        led
    }

    fn lit_level(&self) -> Level {
        if self.active_low { Level::Low } else { Level::High }
    }

    fn dark_level(&self) -> Level {
        if self.active_low { Level::High } else { Level::Low }
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        let level = self.lit_level();
        self.pin.set_level(level);
    }

    fn off(&mut self) {
        let level = self.dark_level();
        self.pin.set_level(level);
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_on(&self) -> bool {
        self.pin.get_output_level() == self.lit_level()
    }
}
