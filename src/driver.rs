use crate::{DEVICE_NAME, I2C_ADDR};

/// Describes a device to instantiate on a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardInfo {
  pub name: &'static str,
  pub addr: u8,
}

impl BoardInfo {
  pub const fn new(name: &'static str, addr: u8) -> Self {
    Self { name, addr }
  }
}

/// Entry of a driver's id table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
  pub name: &'static str,
  pub data: u32,
}

impl DeviceId {
  /// Terminates an id table.
  pub const END: DeviceId = DeviceId::new("", 0);

  pub const fn new(name: &'static str, data: u32) -> Self {
    Self { name, data }
  }

  pub fn is_end(&self) -> bool {
    self.name.is_empty()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverInfo {
  pub name: &'static str,
  pub id_table: &'static [DeviceId],
}

impl DriverInfo {
  /// Look up `info` in the id table. Entries after the terminator are ignored.
  pub fn match_id(&self, info: &BoardInfo) -> Option<&'static DeviceId> {
    self.id_table.iter().take_while(|id| !id.is_end()).find(|id| id.name == info.name)
  }
}

pub const ID_TABLE: &[DeviceId] = &[DeviceId::new(DEVICE_NAME, I2C_ADDR as u32), DeviceId::END];

pub const BOARD_INFO: BoardInfo = BoardInfo::new(DEVICE_NAME, I2C_ADDR);

pub const DRIVER: DriverInfo = DriverInfo { name: DEVICE_NAME, id_table: ID_TABLE };
