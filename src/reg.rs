/******************************************************************************
 * Refer to the MTL2 touch panel controller datasheet for more information.  *
 * ========================================================================== *
 *                       MTL2 - Registers & Board Constants                   *
*******************************************************************************/

/// Name used for the device id table, board info and input device.
pub const DEVICE_NAME: &str = "mtl2_touchscreen";
/// Human readable name of the registered input device.
pub const INPUT_NAME: &str = "MTL2 Touchscreen";
/// Name under which the interrupt line is requested.
pub const IRQ_NAME: &str = "mtl2_irq";

/// 7-bit I²C address of the controller.
pub const I2C_ADDR: u8 = 0x38;
/// Number of the bus adapter the controller hangs off.
pub const ADAPTER_NR: u8 = 1;
/// GPIO line wired to the controller's INT output.
pub const INT_GPIO: u32 = 4;

/// Panel resolution.
pub const MAX_X: i32 = 480;
pub const MAX_Y: i32 = 800;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  DeviceMode = 0x00,
  GestId = 0x01,
  TdStatus = 0x02,

  // Touch point 1 (0x03..0x06)
  Touch1Xh = 0x03,
  Touch1Xl = 0x04,
  Touch1Yh = 0x05,
  Touch1Yl = 0x06,

  // Touch point 2 (0x09..0x0C)
  Touch2Xh = 0x09,
  Touch2Xl = 0x0A,
  Touch2Yh = 0x0B,
  Touch2Yl = 0x0C,

  // Touch point 3 (0x0F..0x12)
  Touch3Xh = 0x0F,
  Touch3Xl = 0x10,
  Touch3Yh = 0x11,
  Touch3Yl = 0x12,

  // Touch point 4 (0x15..0x18)
  Touch4Xh = 0x15,
  Touch4Xl = 0x16,
  Touch4Yh = 0x17,
  Touch4Yl = 0x18,

  // Touch point 5 (0x1B..0x1E)
  Touch5Xh = 0x1B,
  Touch5Xl = 0x1C,
  Touch5Yh = 0x1D,
  Touch5Yl = 0x1E,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}
