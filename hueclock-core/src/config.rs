/// Bring-up settings applied identically to both panels.
///
/// The defaults are deliberately conservative: both panels hang off one
/// power regulator, and they are painfully bright long before the current
/// limit starts to matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// per-LED scaling, 0-255. full scale leaves dimming to global current.
    pub led_scaling: u8,
    /// global current limit, 0-255. keep this low.
    pub global_current: u8,
    /// rotation in quarter turns, passed straight to the driver.
    pub rotation: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            led_scaling: 255,
            global_current: 8,
            rotation: 0,
        }
    }
}
