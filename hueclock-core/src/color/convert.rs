//! hue -> RGB -> the 5/6/5 format the matrix hardware actually takes.

use palette::{Hsv, IntoColor, Srgb};
use smart_leds::RGB8;

use super::wheel::{clock_hue_for_hour, clock_hue_for_minute, clock_hue_for_second};
use crate::clock::WallTime;

/// expand a wheel hue to an RGB triple.
///
/// saturation and value are 0-255, 255 meaning fully saturated at full
/// brightness. pass 255 for both unless you have a reason not to.
pub fn hsv_rgb(hue: u16, sat: u8, val: u8) -> RGB8 {
    let hsv: Hsv = Hsv::new(
        hue as f32 * (360.0 / 65536.0),
        sat as f32 / 255.0,
        val as f32 / 255.0,
    );

    let rgb: Srgb = hsv.into_color();
    let rgb = rgb.into_format::<u8>();

    RGB8::new(rgb.red, rgb.green, rgb.blue)
}

/// wide form: 0xRRGGBB.
pub fn hsv888(hue: u16, sat: u8, val: u8) -> u32 {
    let rgb = hsv_rgb(hue, sat, val);

    ((rgb.r as u32) << 16) | ((rgb.g as u32) << 8) | rgb.b as u32
}

/// narrow form, straight from a hue.
pub fn hsv565(hue: u16, sat: u8, val: u8) -> u16 {
    color565(hsv888(hue, sat, val))
}

/// pack 0xRRGGBB down to 5/6/5.
pub fn color565(color888: u32) -> u16 {
    color565_rgb((color888 >> 16) as u8, (color888 >> 8) as u8, color888 as u8)
}

/// pack an RGB triple down to 5/6/5.
pub fn color565_rgb(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// display color for the hour hand: blue at midnight, red around 4 pm.
pub fn color_for_hour(t: &WallTime) -> u16 {
    hsv565(clock_hue_for_hour(t.hour, t.minute), 255, 255)
}

/// display color for the minute hand.
pub fn color_for_minute(t: &WallTime) -> u16 {
    hsv565(clock_hue_for_minute(t.minute, t.second), 255, 255)
}

/// display color for the second hand. `millis` is supplied by the caller;
/// most RTCs only tick whole seconds.
pub fn color_for_second(t: &WallTime, millis: u16) -> u16 {
    hsv565(clock_hue_for_second(t.second, millis), 255, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_thirds_land_on_pure_channels() {
        assert_eq!(hsv565(0, 255, 255), 0xF800);
        assert_eq!(hsv565(21845, 255, 255), 0x07E0);
        assert_eq!(hsv565(43690, 255, 255), 0x001F);
    }

    #[test]
    fn test_sat_and_val_extremes() {
        // value 0 is black no matter the hue
        assert_eq!(hsv888(12345, 255, 0), 0x000000);
        // saturation 0 is white at full value
        assert_eq!(hsv888(12345, 0, 255), 0xFFFFFF);
    }

    #[test]
    fn test_color565_packing() {
        assert_eq!(color565_rgb(0, 0, 0), 0x0000);
        assert_eq!(color565_rgb(255, 255, 255), 0xFFFF);
        assert_eq!(color565_rgb(0xFF, 0, 0), 0xF800);
        assert_eq!(color565_rgb(0, 0xFF, 0), 0x07E0);
        assert_eq!(color565_rgb(0, 0, 0xFF), 0x001F);
        assert_eq!(color565(0x123456), color565_rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_color_for_unit_is_pure() {
        let noon = WallTime::new(12, 0, 0);

        assert_eq!(color_for_hour(&noon), color_for_hour(&noon));
        assert_eq!(color_for_minute(&noon), color_for_minute(&noon));
        assert_eq!(color_for_second(&noon, 250), color_for_second(&noon, 250));
    }

    #[test]
    fn test_color_for_hour_goes_through_the_adjusted_hue() {
        let noon = WallTime::new(12, 0, 0);

        assert_eq!(color_for_hour(&noon), hsv565(10922, 255, 255));
    }
}
