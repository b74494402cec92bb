use core::fmt;

/// Errors reported by the board layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BspError {
    /// LED index past the number of configured LEDs.
    InvalidLed(usize),
    /// Button index past the number of configured buttons.
    InvalidButton(usize),
    /// A configured bit does not exist on a port.
    PinOutOfRange(u8),
    /// The same bit appears twice in one pin list.
    DuplicatePin(u8),
    /// More pins configured than the board layer tracks.
    TooManyPins(usize),
    /// Inverted bits that are not LEDs.
    StrayInvertedBits(u32),
}

impl fmt::Display for BspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BspError::InvalidLed(idx) => write!(f, "no LED with index {}", idx),
            BspError::InvalidButton(idx) => write!(f, "no button with index {}", idx),
            BspError::PinOutOfRange(bit) => write!(f, "pin bit {} is not on a port", bit),
            BspError::DuplicatePin(bit) => write!(f, "pin bit {} configured twice", bit),
            BspError::TooManyPins(count) => write!(f, "{} pins configured", count),
            BspError::StrayInvertedBits(mask) => {
                write!(f, "inverted bits {:#06x} are not leds", mask)
            }
        }
    }
}

impl core::error::Error for BspError {}
