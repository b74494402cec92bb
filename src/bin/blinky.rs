//! Blue Pill board blinky
//!
//! Alternates the two board LEDs through the index based board API.
//!
//! Hardware Connections:
//!   - LED 0: onboard LED at PC13 (active low)
//!   - LED 1: PC14 -> resistor -> LED -> GND
//!
//! Expected Behavior:
//!   - The LEDs take turns every 300ms
//!   - Every tenth step both LEDs flash together
//!   - LED states are logged via defmt RTT

#![no_std] // No standard library on the MCU
#![no_main] // Entry point comes from embassy

use bluepill_bsp::hardware::stm32_port::Stm32Port; // Register level port access
use bluepill_bsp::{BLUE_PILL, Board, InitFlags, LED_0, LED_1};
use defmt::*; // Formatted logging macros
use embassy_executor::Spawner; // Async executor
use embassy_time::Timer; // Time-related functionality
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Port clocks are enabled here
    let _p = embassy_stm32::init(Default::default());

    let mut board = unwrap!(Board::new(
        BLUE_PILL,
        Stm32Port::new(BLUE_PILL.led_port),
        Stm32Port::new(BLUE_PILL.button_port),
    ));
    // LED pins become push-pull outputs, all LEDs start dark
    board.init(InitFlags::LEDS);

    info!("Blinking {} LEDs on {}", board.led_count(), BLUE_PILL.name);

    // Start with LED 0 lit so the two alternate
    unwrap!(board.led_on(LED_0));
    let mut step: u32 = 0;
    loop {
        Timer::after_millis(300).await;
        step = step.wrapping_add(1);

        // Flash both LEDs together every tenth step
        if step % 10 == 0 {
            board.leds_on();
            Timer::after_millis(100).await;
            board.leds_off();
            unwrap!(board.led_on(LED_0));
            continue;
        }

        unwrap!(board.led_invert(LED_0));
        unwrap!(board.led_invert(LED_1));
        info!(
            "LED 0: {}, LED 1: {}",
            unwrap!(board.led_state_get(LED_0)),
            unwrap!(board.led_state_get(LED_1))
        );
    }
}
