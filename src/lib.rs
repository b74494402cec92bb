//! Board support for STM32F103 "Blue Pill" class boards.
//!
//! Gives logical, index based access to the LEDs and buttons wired to a
//! board, translation between pin numbers and those indices, and bitmask
//! control of the LEDs through a port's set/clear register.

#![cfg_attr(not(test), no_std)]

mod log;

pub mod board;
pub mod bsp;
pub mod error;
pub mod hardware;
pub mod pin;

pub use board::{BoardConfig, BLUE_PILL, BUTTON_0, BUTTON_1, LED_0, LED_1};
pub use bsp::{Board, InitFlags, INVALID_INDEX};
pub use error::BspError;
pub use pin::{PinNumber, Port};
