pub mod traits;

#[cfg(feature = "stm32")]
pub mod gpio_button;
#[cfg(feature = "stm32")]
pub mod gpio_led;
#[cfg(feature = "stm32")]
pub mod stm32_port;

pub use traits::{Button, GpioPort, Led, Pull};
