//! hue math for the clock face.
//!
//! a hue is a position on a 16 bit color wheel that wraps at 65536. the
//! `hue_for_*` functions are the raw wheel positions; the `clock_hue_for_*`
//! variants apply the adjustment that makes the face blue at midnight.
//! both sets stay public because raw positions are still the right thing
//! for anything that isn't the clock face itself.

/// one full turn of the color wheel.
const WHEEL: u32 = 65536;

/// rescale a position inside `domain` onto the full wheel.
///
/// truncating division: position 0 lands on hue 0 and `domain - 1` lands
/// just short of the wrap. callers clamp their fields first, which keeps
/// `position < domain` and the product inside u32.
fn scale_to_wheel(position: u32, domain: u32) -> u16 {
    (position * WHEEL / domain) as u16
}

/// slide the hue a third of the way around the wheel, then invert it.
///
/// this starts the cycle at blue, with red landing about 2/3 of the way
/// through. on the hour cycle that makes the face blue at midnight and red
/// around 4 pm, which is nice.
pub fn adjust_hue(hue: u16) -> u16 {
    const SLIDE: u16 = (WHEEL / 3) as u16;

    65535 - hue.wrapping_add(SLIDE)
}

/// raw wheel position for the hour hand: one full turn per day.
///
/// out of range fields clamp to their maximum. a bad RTC read gets a
/// slightly wrong color, never a fault.
pub fn hue_for_hour(hour: u8, minute: u8) -> u16 {
    let hour = hour.min(23) as u32;
    let minute = minute.min(59) as u32;

    scale_to_wheel(hour * 60 + minute, 24 * 60)
}

/// raw wheel position for the minute hand: one full turn per hour.
pub fn hue_for_minute(minute: u8, second: u8) -> u16 {
    let minute = minute.min(59) as u32;
    let second = second.min(59) as u32;

    scale_to_wheel(minute * 60 + second, 60 * 60)
}

/// raw wheel position for the second hand: one full turn per minute.
///
/// `millis` keeps the sweep smooth between RTC ticks. the domain counts
/// half-milliseconds (500 per second) so the math keeps sub-second
/// precision without needing anything wider than u32.
pub fn hue_for_second(second: u8, millis: u16) -> u16 {
    let second = second.min(59) as u32;
    let millis = millis.min(999) as u32;

    scale_to_wheel(second * 500 + millis / 2, 60 * 500)
}

/// [`hue_for_hour`] with the clock face adjustment applied.
pub fn clock_hue_for_hour(hour: u8, minute: u8) -> u16 {
    adjust_hue(hue_for_hour(hour, minute))
}

/// [`hue_for_minute`] with the clock face adjustment applied.
pub fn clock_hue_for_minute(minute: u8, second: u8) -> u16 {
    adjust_hue(hue_for_minute(minute, second))
}

/// [`hue_for_second`] with the clock face adjustment applied.
pub fn clock_hue_for_second(second: u8, millis: u16) -> u16 {
    adjust_hue(hue_for_second(second, millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_hue_monotonic_over_the_day() {
        let mut prev = hue_for_hour(0, 0);
        assert_eq!(prev, 0);

        for minute_of_day in 1..(24 * 60) {
            let hue = hue_for_hour((minute_of_day / 60) as u8, (minute_of_day % 60) as u8);
            assert!(hue >= prev, "hue went down at minute {}", minute_of_day);
            prev = hue;
        }

        // 1439 * 65536 / 1440, truncated
        assert_eq!(prev, 65490);
    }

    #[test]
    fn test_out_of_range_fields_clamp_to_max() {
        assert_eq!(hue_for_hour(30, 70), hue_for_hour(23, 59));
        assert_eq!(hue_for_minute(60, 200), hue_for_minute(59, 59));
        assert_eq!(hue_for_second(99, 5000), hue_for_second(59, 999));
    }

    #[test]
    fn test_adjust_matches_slide_and_invert() {
        for hue in 0..=u16::MAX {
            let expected = (65535 - ((hue as u32 + 65536 / 3) % 65536)) as u16;
            assert_eq!(adjust_hue(hue), expected);
        }
    }

    #[test]
    fn test_noon_hour_hue() {
        // minute-of-day 720 over a domain of 1440 is exactly half the wheel
        assert_eq!(hue_for_hour(12, 0), 32768);
        assert_eq!(clock_hue_for_hour(12, 0), 10922);
    }

    #[test]
    fn test_minute_hue_midpoint() {
        assert_eq!(hue_for_minute(30, 0), 32768);
    }

    #[test]
    fn test_half_minute_second_hue() {
        // 30 * 500 + 500 / 2 = 15250 over a domain of 30000
        assert_eq!(hue_for_second(30, 500) as u32, 15250 * 65536 / 30000);
        assert_eq!(hue_for_second(30, 500), 33314);
    }

    #[test]
    fn test_second_hue_uses_half_millis() {
        // consecutive millis land on the same half-millisecond step
        assert_eq!(hue_for_second(0, 0), 0);
        assert_eq!(hue_for_second(0, 1), 0);
        assert!(hue_for_second(0, 2) > 0);
    }
}
