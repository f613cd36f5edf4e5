//! two matrix controllers pretending to be one wide display.

use core::fmt;

use crate::config::Config;
use crate::errors::{HueclockError, HueclockResult};
use crate::logging::{debug, warn};

use super::{ColorOrder, MatrixDriver};

/// one panel's driver plus everything needed to address it. fixed at
/// construction for the life of the process.
pub struct DeviceBinding<D: MatrixDriver> {
    driver: D,
    bus: D::Bus,
    address: u8,
    order: ColorOrder,
}

impl<D: MatrixDriver> DeviceBinding<D> {
    pub fn new(driver: D, bus: D::Bus, address: u8, order: ColorOrder) -> Self {
        Self {
            driver,
            bus,
            address,
            order,
        }
    }

    fn begin(&mut self) -> bool {
        self.driver.begin(&mut self.bus, self.address, self.order)
    }
}

/// two horizontally adjacent panels behind one coordinate space.
///
/// the logical origin is the left panel's origin; the right panel picks up
/// at x = left width, no gap, no overlap. drawing calls fan out to both
/// drivers, left first, with x translated for the right one. nothing here
/// clips or validates: each driver ignores coordinates outside its own
/// bounds.
pub struct DualPanel<D: MatrixDriver> {
    left: DeviceBinding<D>,
    right: DeviceBinding<D>,
}

impl<D: MatrixDriver> DualPanel<D> {
    pub fn new(left: DeviceBinding<D>, right: DeviceBinding<D>) -> Self {
        Self { left, right }
    }

    /// bring both devices up, left first, then apply the default [`Config`]
    /// to both.
    pub fn initialize(&mut self) -> HueclockResult<()> {
        self.initialize_with(&Config::default())
    }

    /// like [`DualPanel::initialize`] but with explicit bring-up settings.
    ///
    /// if either `begin` fails, the error says which panel (1 = left,
    /// 2 = right) and neither device receives any of the post-init
    /// configuration.
    pub fn initialize_with(&mut self, config: &Config) -> HueclockResult<()> {
        for (ordinal, binding) in (1u8..).zip([&mut self.left, &mut self.right]) {
            if !binding.begin() {
                warn!("panel {} failed to begin", ordinal);
                return Err(HueclockError::PanelInit(ordinal));
            }
        }

        for binding in [&mut self.left, &mut self.right] {
            let driver = &mut binding.driver;
            driver.set_led_scaling(config.led_scaling);
            driver.set_global_current(config.global_current);
            driver.enable(true);
            driver.set_rotation(config.rotation);
            // a wrapped line would continue across the seam mid-glyph
            driver.set_text_wrap(false);
        }

        debug!("both panels up");

        Ok(())
    }

    /// global current on both devices. this is the brightness knob.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.left.driver.set_global_current(brightness);
        self.right.driver.set_global_current(brightness);
    }

    pub fn set_font(&mut self, font: Option<&D::Font>) {
        self.left.driver.set_font(font);
        self.right.driver.set_font(font);
    }

    pub fn set_text_color(&mut self, color: u16) {
        self.left.driver.set_text_color(color);
        self.right.driver.set_text_color(color);
    }

    pub fn set_text_color_bg(&mut self, color: u16, background: u16) {
        self.left.driver.set_text_color_bg(color, background);
        self.right.driver.set_text_color_bg(color, background);
    }

    pub fn fill(&mut self, color: u16) {
        self.left.driver.fill(color);
        self.right.driver.fill(color);
    }

    /// logical width, both panels together.
    pub fn width(&self) -> i16 {
        self.left.driver.width() + self.right.driver.width()
    }

    /// the right panel always gets x offset by the left panel's width, even
    /// when x is nowhere near the right panel. the width is read fresh from
    /// the left driver on every call, never cached.
    pub fn set_cursor(&mut self, x: i16, y: i16) {
        let left_width = self.left.driver.width();

        self.left.driver.set_cursor(x, y);
        self.right.driver.set_cursor(x - left_width, y);
    }

    /// same translation rule as [`DualPanel::set_cursor`].
    pub fn draw_pixel(&mut self, x: i16, y: i16, color: u16) {
        let left_width = self.left.driver.width();

        self.left.driver.draw_pixel(x, y, color);
        self.right.driver.draw_pixel(x - left_width, y, color);
    }

    /// stream one byte of text to both panels. each panel advances its own
    /// cursor in lockstep and only renders the glyphs that land inside its
    /// width, so a string started with [`DualPanel::set_cursor`] splits
    /// across the seam on its own. always reports one byte consumed.
    pub fn write_byte(&mut self, byte: u8) -> usize {
        self.left.driver.write_byte(byte);
        self.right.driver.write_byte(byte);
        1
    }

    /// push the buffered pixels to the hardware, left then right. the only
    /// call that touches the bus after bring-up.
    pub fn show(&mut self) {
        self.left.driver.show();
        self.right.driver.show();
    }
}

impl<D: MatrixDriver> fmt::Write for DualPanel<D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            self.write_byte(byte);
        }

        Ok(())
    }
}
