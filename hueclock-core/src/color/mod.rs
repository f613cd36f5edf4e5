//! time -> hue -> color.
//!
//! the clock face sweeps the color wheel once per cycle of whichever unit
//! it's animating: the hour hand over a day, the minute hand over an hour,
//! the second hand over a minute. `wheel` does the integer hue math and
//! `convert` turns a hue into something the matrix hardware accepts.

mod convert;
mod wheel;

pub use convert::{
    color565, color565_rgb, color_for_hour, color_for_minute, color_for_second, hsv_rgb, hsv565,
    hsv888,
};
pub use wheel::{
    adjust_hue, clock_hue_for_hour, clock_hue_for_minute, clock_hue_for_second, hue_for_hour,
    hue_for_minute, hue_for_second,
};
