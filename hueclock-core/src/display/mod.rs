//! two physical panels, one logical display.

mod driver;
mod dual;

pub use driver::{ColorOrder, MatrixDriver};
pub use dual::{DeviceBinding, DualPanel};
