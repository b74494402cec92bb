/// Input pull configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Register level access to one GPIO port.
///
/// Masks are port-relative, bit `n` is pin `n` of the port.
pub trait GpioPort {
    /// Current output latch (`OUT`/`ODR`).
    fn out(&self) -> u32;

    /// Drive the bits in `mask` high, leaving the others alone (`OUTSET`).
    fn out_set(&mut self, mask: u32);

    /// Drive the bits in `mask` low, leaving the others alone (`OUTCLR`).
    fn out_clr(&mut self, mask: u32);

    /// Sampled pin levels (`IN`/`IDR`).
    fn input(&self) -> u32;

    fn configure_output(&mut self, bit: u8);

    fn configure_input(&mut self, bit: u8, pull: Pull);
}

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);
    fn is_on(&self) -> bool;
}

pub trait Button {
    fn is_pressed(&self) -> bool;
}
