//! Single pin LED and button
//!
//! Drives the onboard LED from one button without the board tables, using
//! the per-pin `GpioLed` and `GpioButton` wrappers.
//!
//! Hardware Connections:
//!   - LED: onboard LED at PC13 (active low)
//!   - Button: PB1 (connect to ground when pressed, pull-up enabled)
//!
//! Expected Behavior:
//!   - The LED is lit while the button is held

#![no_std]
#![no_main]

use bluepill_bsp::hardware::gpio_button::GpioButton;
use bluepill_bsp::hardware::gpio_led::GpioLed;
use bluepill_bsp::hardware::{Button, Led};
use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let mut led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low), true);
    let button = GpioButton::new(Input::new(p.PB1, Pull::Up), true);

    let mut was_pressed = false;
    loop {
        let pressed = button.is_pressed();
        if pressed != was_pressed {
            info!("Button {}", if pressed { "pressed" } else { "released" });
            was_pressed = pressed;
        }

        if pressed {
            led.on();
        } else {
            led.off();
        }

        // Polling interval
        Timer::after_millis(10).await;
    }
}
