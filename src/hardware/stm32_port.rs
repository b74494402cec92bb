//! [`GpioPort`] on the STM32F1 GPIO register block.
//!
//! `BSRR` plays the role of the set and clear registers: writing the low
//! half sets output bits, writing the high half clears them, and neither
//! touches bits that are zero in the written value.

use embassy_stm32::pac;
use embassy_stm32::pac::gpio::{regs, vals};

use super::traits::{GpioPort, Pull};
use crate::pin::Port;

const PORT_BITS: u32 = 0xFFFF;

/// One GPIO port. Copies refer to the same hardware.
///
/// Port clocks are enabled by `embassy_stm32::init`, which must run first.
#[derive(Clone, Copy)]
pub struct Stm32Port {
    regs: pac::gpio::Gpio,
}

impl Stm32Port {
    pub fn new(port: Port) -> Self {
        let regs = match port {
            Port::A => pac::GPIOA,
            Port::B => pac::GPIOB,
            Port::C => pac::GPIOC,
            Port::D => pac::GPIOD,
        };
        Self { regs }
    }
}

impl GpioPort for Stm32Port {
    fn out(&self) -> u32 {
        self.regs.odr().read().0 & PORT_BITS
    }

    fn out_set(&mut self, mask: u32) {
        self.regs.bsrr().write_value(regs::Bsrr(mask & PORT_BITS));
    }

    fn out_clr(&mut self, mask: u32) {
        self.regs.bsrr().write_value(regs::Bsrr((mask & PORT_BITS) << 16));
    }

    fn input(&self) -> u32 {
        self.regs.idr().read().0 & PORT_BITS
    }

    fn configure_output(&mut self, bit: u8) {
        let n = bit as usize;
        self.regs.cr(n / 8).modify(|w| {
            w.set_mode(n % 8, vals::Mode::OUTPUT2MHZ);
            w.set_cnf_out(n % 8, vals::CnfOut::PUSHPULL);
        });
    }

    fn configure_input(&mut self, bit: u8, pull: Pull) {
        let n = bit as usize;
        let cnf = match pull {
            Pull::None => vals::CnfIn::FLOATING,
            Pull::Up | Pull::Down => vals::CnfIn::PULL,
        };
        // In pull mode the output latch picks the direction.
        match pull {
            Pull::Up => self.out_set(1 << n),
            Pull::Down => self.out_clr(1 << n),
            Pull::None => {}
        }
        self.regs.cr(n / 8).modify(|w| {
            w.set_mode(n % 8, vals::Mode::INPUT);
            w.set_cnf_in(n % 8, cnf);
        });
    }
}
