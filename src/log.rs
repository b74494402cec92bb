//! Logging front end.
//!
//! On target the crate logs through defmt; host builds go through the `log`
//! facade instead. With neither feature the macros compile to nothing.

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, info, warn};

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub(crate) use log::{debug, info, warn};

#[cfg(not(any(feature = "log", feature = "defmt")))]
mod quiet {
    macro_rules! quiet {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*);
        }};
    }
    pub(crate) use quiet;
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
pub(crate) use quiet::{quiet as debug, quiet as info, quiet as warn};
