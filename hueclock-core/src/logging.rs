//! route the logging macros to either `log` or `defmt` depending on the build.

#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

#[cfg(not(feature = "log"))]
pub use defmt::{debug, error, info, trace, warn};
