//! Board behaviour against an in-memory port.

use bluepill_bsp::board::BoardConfig;
use bluepill_bsp::bsp::{BoardButton, BoardLed};
use bluepill_bsp::hardware::{Button, GpioPort, Led, Pull};
use bluepill_bsp::{
    Board, BspError, InitFlags, PinNumber, Port, BLUE_PILL, BUTTON_0, BUTTON_1, INVALID_INDEX,
    LED_0, LED_1,
};
use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};

/// Register writes seen by a `FakePort`.
#[derive(Debug, PartialEq, Eq)]
enum Write {
    Set(u32),
    Clr(u32),
}

#[derive(Default)]
struct FakePort {
    out: u32,
    input: u32,
    outputs: u32,
    pulls: [Option<Pull>; 16],
    writes: Vec<Write>,
}

impl GpioPort for FakePort {
    fn out(&self) -> u32 {
        self.out
    }

    fn out_set(&mut self, mask: u32) {
        self.out |= mask;
        self.writes.push(Write::Set(mask));
    }

    fn out_clr(&mut self, mask: u32) {
        self.out &= !mask;
        self.writes.push(Write::Clr(mask));
    }

    fn input(&self) -> u32 {
        self.input
    }

    fn configure_output(&mut self, bit: u8) {
        self.outputs |= 1 << bit;
    }

    fn configure_input(&mut self, bit: u8, pull: Pull) {
        self.pulls[bit as usize] = Some(pull);
    }
}

const PC13: u32 = 2 * 16 + 13;
const PC14: u32 = 2 * 16 + 14;
const PB1: u32 = 16 + 1;
const PB15: u32 = 16 + 15;

fn blue_pill() -> Board<FakePort, FakePort> {
    let mut board = Board::new(BLUE_PILL, FakePort::default(), FakePort::default()).unwrap();
    board.init(InitFlags::LEDS | InitFlags::BUTTONS);
    board.led_port_mut().writes.clear();
    board
}

/// Nothing held down: both pulled-up buttons read high.
fn release_all(board: &mut Board<FakePort, FakePort>) {
    board.button_port_mut().input = (1 << 1) | (1 << 15);
}

#[test]
fn init_configures_pins_and_darkens_leds() {
    let mut board = Board::new(BLUE_PILL, FakePort::default(), FakePort::default()).unwrap();
    board.init(InitFlags::LEDS | InitFlags::BUTTONS);

    assert_eq!(board.led_port().outputs, (1 << 13) | (1 << 14));
    // PC13 is active low, so off means high.
    assert_eq!(board.led_port().out, 1 << 13);
    assert_eq!(board.button_port().pulls[1], Some(Pull::Up));
    assert_eq!(board.button_port().pulls[15], Some(Pull::Up));
    assert_eq!(board.button_port().pulls[0], None);

    assert!(!board.led_state_get(LED_0).unwrap());
    assert!(!board.led_state_get(LED_1).unwrap());
}

#[test]
fn init_flags_are_selective() {
    let mut board = Board::new(BLUE_PILL, FakePort::default(), FakePort::default()).unwrap();
    board.init(InitFlags::BUTTONS);
    assert_eq!(board.led_port().outputs, 0);
    assert!(board.led_port().writes.is_empty());
    assert_eq!(board.button_port().pulls[1], Some(Pull::Up));
}

#[test]
fn on_off_round_trip() {
    let mut board = blue_pill();
    for led in 0..board.led_count() {
        board.led_on(led).unwrap();
        assert!(board.led_state_get(led).unwrap());
        board.led_off(led).unwrap();
        assert!(!board.led_state_get(led).unwrap());
    }
}

#[test]
fn active_low_led_drives_pin_low() {
    let mut board = blue_pill();
    board.led_on(LED_0).unwrap();
    assert_eq!(board.led_port().out & (1 << 13), 0);
    assert_eq!(board.led_port().writes, [Write::Clr(1 << 13), Write::Set(0)]);

    board.led_on(LED_1).unwrap();
    assert_eq!(board.led_port().out & (1 << 14), 1 << 14);
}

#[test]
fn one_led_leaves_the_other_alone() {
    let mut board = blue_pill();
    board.led_on(LED_1).unwrap();
    board.led_on(LED_0).unwrap();
    board.led_off(LED_0).unwrap();
    assert!(board.led_state_get(LED_1).unwrap());
    assert!(!board.led_state_get(LED_0).unwrap());
}

#[test]
fn invert_twice_restores() {
    let mut board = blue_pill();
    board.led_on(LED_1).unwrap();
    let before = board.led_port().out;

    board.led_invert(LED_0).unwrap();
    assert!(board.led_state_get(LED_0).unwrap());
    assert!(board.led_state_get(LED_1).unwrap());

    board.led_invert(LED_0).unwrap();
    assert_eq!(board.led_port().out, before);
}

#[test]
fn bulk_on_off() {
    let mut board = blue_pill();
    board.leds_on();
    assert!(board.led_state_get(LED_0).unwrap());
    assert!(board.led_state_get(LED_1).unwrap());
    assert_eq!(board.led_is_on_mask(board.leds_mask()), board.leds_mask());

    board.leds_off();
    assert_eq!(board.led_is_on_mask(board.leds_mask()), 0);
}

#[test]
fn masks_stay_on_led_bits() {
    let mut board = blue_pill();
    board.led_port_mut().out |= 1 << 3;

    board.leds_on_mask(0xFFFF_FFFF);
    board.leds_off_mask(0xFFFF_FFFF);
    board.leds_invert_mask(0xFFFF_FFFF);
    assert_eq!(board.led_port().out & !board.leds_mask(), 1 << 3);

    for write in &board.led_port().writes {
        let (Write::Set(mask) | Write::Clr(mask)) = write;
        assert_eq!(mask & !board.leds_mask(), 0);
    }
}

#[test]
fn invert_mask_flips_each_led() {
    let mut board = blue_pill();
    board.led_on(LED_0).unwrap();
    board.leds_invert_mask(board.leds_mask());
    assert!(!board.led_state_get(LED_0).unwrap());
    assert!(board.led_state_get(LED_1).unwrap());
}

#[test]
fn configure_mask() {
    let mut board = blue_pill();
    board.leds_configure((1 << 2) | (1 << 9));
    assert_eq!(board.led_port().outputs, (1 << 2) | (1 << 9) | board.leds_mask());
}

#[test]
fn led_pin_translation() {
    let board = blue_pill();
    assert_eq!(board.pin_to_led_idx(PC13), Some(LED_0));
    assert_eq!(board.pin_to_led_idx(PC14), Some(LED_1));

    for led in 0..board.led_count() {
        let pin = board.led_idx_to_pin(led).unwrap();
        assert_eq!(board.pin_to_led_idx(pin.raw()), Some(led));
    }
}

#[test]
fn unknown_pins_give_sentinel() {
    let board = blue_pill();
    // Same bit on the wrong port.
    assert_eq!(board.pin_to_led_idx(13), None);
    assert_eq!(board.pin_to_led_idx_raw(13), INVALID_INDEX);
    assert_eq!(board.pin_to_led_idx_raw(PB1), INVALID_INDEX);
    assert_eq!(board.pin_to_led_idx_raw(1000), INVALID_INDEX);
    assert_eq!(board.pin_to_led_idx_raw(0xFFFF_FFFF), INVALID_INDEX);
    assert_eq!(board.pin_to_led_idx_raw(PC14), 1);

    for pin in 0..64 {
        if pin != PC13 && pin != PC14 {
            assert_eq!(board.pin_to_led_idx_raw(pin), INVALID_INDEX, "pin {}", pin);
        }
    }
}

#[test]
fn button_pin_translation() {
    let board = blue_pill();
    assert_eq!(board.pin_to_button_idx(PB1), Some(BUTTON_0));
    assert_eq!(board.pin_to_button_idx(PB15), Some(BUTTON_1));
    assert_eq!(
        board.button_idx_to_pin(BUTTON_0),
        Ok(PinNumber::new(Port::B, 1))
    );
    assert_eq!(
        board.button_idx_to_pin(BUTTON_1),
        Ok(PinNumber::new(Port::B, 15))
    );

    for button in 0..board.button_count() {
        let pin = board.button_idx_to_pin(button).unwrap();
        assert_eq!(board.pin_to_button_idx(pin.raw()), Some(button));
    }
}

#[test]
fn unknown_button_pins_give_sentinel() {
    let board = blue_pill();
    // PA1 and PC15 have button bits on the wrong port.
    assert_eq!(board.pin_to_button_idx(1), None);
    assert_eq!(board.pin_to_button_idx_raw(1), INVALID_INDEX);
    assert_eq!(board.pin_to_button_idx_raw(2 * 16 + 15), INVALID_INDEX);
    assert_eq!(board.pin_to_button_idx_raw(PC13), INVALID_INDEX);
    assert_eq!(board.pin_to_button_idx_raw(64), INVALID_INDEX);
    assert_eq!(board.pin_to_button_idx_raw(0xFFFF_FFFF), INVALID_INDEX);
    assert_eq!(board.pin_to_button_idx_raw(PB15), 1);

    for pin in 0..64 {
        if pin != PB1 && pin != PB15 {
            assert_eq!(board.pin_to_button_idx_raw(pin), INVALID_INDEX, "pin {}", pin);
        }
    }
}

#[test]
fn out_of_range_indices() {
    let mut board = blue_pill();
    assert_eq!(board.led_on(2), Err(BspError::InvalidLed(2)));
    assert_eq!(board.led_off(7), Err(BspError::InvalidLed(7)));
    assert_eq!(board.led_invert(2), Err(BspError::InvalidLed(2)));
    assert_eq!(board.led_state_get(2), Err(BspError::InvalidLed(2)));
    assert_eq!(board.led_idx_to_pin(2), Err(BspError::InvalidLed(2)));
    assert_eq!(board.button_state_get(2), Err(BspError::InvalidButton(2)));
    assert_eq!(board.button_idx_to_pin(5), Err(BspError::InvalidButton(5)));
    assert!(board.led_port().writes.is_empty());
}

#[test]
fn buttons_read_active_low() {
    let mut board = blue_pill();
    release_all(&mut board);
    assert!(!board.button_state_get(BUTTON_0).unwrap());
    assert!(!board.button_state_get(BUTTON_1).unwrap());
    assert!(board.pressed_buttons().is_empty());

    // Press PB15.
    board.button_port_mut().input &= !(1 << 15);
    assert!(!board.button_state_get(BUTTON_0).unwrap());
    assert!(board.button_state_get(BUTTON_1).unwrap());
    assert_eq!(board.buttons_pressed_mask(), 1 << 15);
    assert_eq!(board.pressed_buttons().as_slice(), &[BUTTON_1]);

    board.button_port_mut().input = 0;
    assert_eq!(board.pressed_buttons().as_slice(), &[BUTTON_0, BUTTON_1]);
}

#[test]
fn buttons_read_active_high() {
    let config = BoardConfig {
        button_pull: Pull::Down,
        buttons_active_low: false,
        ..BLUE_PILL
    };
    let mut board = Board::new(config, FakePort::default(), FakePort::default()).unwrap();
    board.buttons_init();
    assert_eq!(board.button_port().pulls[1], Some(Pull::Down));

    board.button_port_mut().input = 1 << 1;
    assert!(board.button_state_get(BUTTON_0).unwrap());
    assert!(!board.button_state_get(BUTTON_1).unwrap());
}

#[test]
fn bad_config_is_rejected() {
    let config = BoardConfig {
        leds: &[13, 13],
        ..BLUE_PILL
    };
    assert!(matches!(
        Board::new(config, FakePort::default(), FakePort::default()),
        Err(BspError::DuplicatePin(13))
    ));

    // PC3 is not an LED, so it cannot be inverted.
    let config = BoardConfig {
        leds_inv_mask: (1 << 13) | (1 << 3),
        ..BLUE_PILL
    };
    assert!(matches!(
        Board::new(config, FakePort::default(), FakePort::default()),
        Err(BspError::StrayInvertedBits(0b1000))
    ));
}

#[test]
fn led_handle() {
    let mut board = blue_pill();
    {
        let mut led: BoardLed<'_, _, _> = board.led(LED_0).unwrap();
        led.on();
        assert!(led.is_on());
        Led::toggle(&mut led);
        assert!(!led.is_on());

        led.set_high().unwrap();
        assert!(led.is_set_high().unwrap());
        StatefulOutputPin::toggle(&mut led).unwrap();
        assert!(led.is_set_low().unwrap());
    }
    assert!(!board.led_state_get(LED_0).unwrap());
    assert!(board.led(3).is_err());
}

#[test]
fn button_handle() {
    let mut board = blue_pill();
    release_all(&mut board);
    board.button_port_mut().input &= !(1 << 1);

    let mut button: BoardButton<'_, _, _> = board.button(BUTTON_0).unwrap();
    assert!(button.is_pressed());
    assert!(button.is_high().unwrap());

    let mut other = board.button(BUTTON_1).unwrap();
    assert!(!other.is_pressed());
    assert!(other.is_low().unwrap());
    assert!(board.button(2).is_err());
}

#[test]
fn release_returns_ports() {
    let mut board = blue_pill();
    board.leds_on();
    let (leds, _buttons) = board.release();
    assert_eq!(leds.out, 1 << 14);
}
