//! Blue Pill button-to-LED example
//!
//! Each board button toggles the LED with the same index. The button tasks
//! translate their EXTI pin back to a button index and hand it to the main
//! loop over a channel.
//!
//! Hardware Connections:
//!   - Button 0: PB1 (connect to ground when pressed, pull-up enabled)
//!   - Button 1: PB15 (connect to ground when pressed, pull-up enabled)
//!   - LED 0: onboard LED at PC13
//!   - LED 1: PC14 -> resistor -> LED -> GND
//!
//! Expected Behavior:
//!   - Pressing button N toggles LED N
//!   - Presses are logged via defmt RTT

#![no_std]
#![no_main]

use bluepill_bsp::hardware::stm32_port::Stm32Port;
use bluepill_bsp::{BLUE_PILL, Board, InitFlags, PinNumber, Port};
use defmt_rtt as _; // defmt logging over RTT
use embassy_executor::Spawner;
use embassy_stm32::{
    exti::ExtiInput, // External interrupt handling
    gpio::Pull,
};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, Sender},
};
use embassy_time::{Duration, Timer};
use panic_probe as _; // Panic handler with defmt integration

// Indices of pressed buttons
static BUTTON_CHANNEL: Channel<ThreadModeRawMutex, usize, 4> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Initialize microcontroller peripherals with default configuration
    let p = embassy_stm32::init(Default::default());

    // Board LEDs on port C, buttons on port B
    let mut board = defmt::unwrap!(Board::new(
        BLUE_PILL,
        Stm32Port::new(BLUE_PILL.led_port),
        Stm32Port::new(BLUE_PILL.button_port),
    ));
    // The EXTI inputs below configure the button pins themselves.
    board.init(InitFlags::LEDS);

    // Configure button pins with:
    // - Internal pull-up resistor (active when button not pressed)
    // - External interrupt capability
    let button0 = ExtiInput::new(p.PB1, p.EXTI1, Pull::Up);
    let button1 = ExtiInput::new(p.PB15, p.EXTI15, Pull::Up);

    for (exti, pin) in [
        (button0, PinNumber::new(Port::B, 1)),
        (button1, PinNumber::new(Port::B, 15)),
    ] {
        let Some(index) = board.pin_to_button_idx(pin.raw()) else {
            defmt::warn!("{} is not a board button", pin);
            continue;
        };
        spawner
            .spawn(button_task(exti, index, BUTTON_CHANNEL.sender()))
            .expect("Failed to spawn button task");
    }

    // Toggle the LED matching each reported button
    loop {
        let index = BUTTON_CHANNEL.receive().await;
        match board.led_invert(index) {
            Ok(()) => defmt::info!("Button {} toggled LED {}", index, index),
            Err(err) => defmt::warn!("Button {}: {}", index, err),
        }
    }
}

/// Waits for presses on one button and reports its index.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(
    mut button: ExtiInput<'static>,
    index: usize,
    sender: Sender<'static, ThreadModeRawMutex, usize, 4>,
) {
    loop {
        // Wait for falling edge (button press)
        button.wait_for_falling_edge().await;

        // Debounce delay
        Timer::after(Duration::from_millis(50)).await;
        if button.is_high() {
            continue;
        }

        sender.send(index).await;

        // Wait for button release (rising edge)
        button.wait_for_rising_edge().await;
    }
}
