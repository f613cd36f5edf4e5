//! the seam between this crate and the actual matrix driver.

/// color channel ordering of a panel. some boards route the three LED
/// channels differently and the driver needs to know which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

/// The driver surface [`DualPanel`] consumes, one implementation per
/// concrete matrix controller.
///
/// Everything except `begin` and `show` only mutates the driver's in-memory
/// state; `show` is what actually goes out over the bus.
///
/// [`DualPanel`]: super::DualPanel
pub trait MatrixDriver {
    /// handle for whatever bus the controller hangs off, usually an I2C
    /// peripheral.
    type Bus;
    /// font handle for the text renderer.
    type Font;

    /// bring the device up at `address` on `bus`. true on success.
    fn begin(&mut self, bus: &mut Self::Bus, address: u8, order: ColorOrder) -> bool;

    fn set_led_scaling(&mut self, scale: u8);
    fn set_global_current(&mut self, current: u8);
    fn enable(&mut self, on: bool);
    /// rotation in quarter turns.
    fn set_rotation(&mut self, rotation: u8);
    fn set_text_wrap(&mut self, wrap: bool);
    fn set_font(&mut self, font: Option<&Self::Font>);
    fn set_text_color(&mut self, color: u16);
    fn set_text_color_bg(&mut self, color: u16, background: u16);

    fn fill(&mut self, color: u16);
    /// out of bounds coordinates are the driver's to silently ignore.
    fn draw_pixel(&mut self, x: i16, y: i16, color: u16);
    fn set_cursor(&mut self, x: i16, y: i16);
    /// feed one byte to the text renderer at the current cursor.
    fn write_byte(&mut self, byte: u8);

    /// push the pixel buffer to the hardware.
    fn show(&mut self);

    /// visible width in pixels.
    fn width(&self) -> i16;
}
