//! Input-event side of the driver: the sink decoded touches are published to
//! and the description it is registered with.

use crate::host::ErrorKind;
use crate::{INPUT_NAME, MAX_X, MAX_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AbsAxis {
  X,
  Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
  /// Contact with the panel surface.
  Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
  Abs(AbsAxis, i32),
  Key(Key, bool),
  /// Closes the current frame; everything since the previous sync is one report.
  Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusType {
  I2c,
}

/// Range advertised for an absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AbsInfo {
  pub axis: AbsAxis,
  pub min: i32,
  pub max: i32,
  pub fuzz: i32,
  pub flat: i32,
}

impl AbsInfo {
  pub const fn new(axis: AbsAxis, min: i32, max: i32) -> Self {
    Self { axis, min, max, fuzz: 0, flat: 0 }
  }
}

/// Capabilities announced when the sink is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputDevice {
  pub name: &'static str,
  pub bus: BusType,
  /// Coordinates map directly onto the screen (touchscreen, not touchpad).
  pub direct: bool,
  pub keys: &'static [Key],
  pub abs: [AbsInfo; 2],
}

impl InputDevice {
  /// Single contact touchscreen spanning the panel resolution.
  pub const fn touchscreen() -> Self {
    Self {
      name: INPUT_NAME,
      bus: BusType::I2c,
      direct: true,
      keys: &[Key::Touch],
      abs: [AbsInfo::new(AbsAxis::X, 0, MAX_X), AbsInfo::new(AbsAxis::Y, 0, MAX_Y)],
    }
  }

  pub fn abs_info(&self, axis: AbsAxis) -> Option<&AbsInfo> {
    self.abs.iter().find(|a| a.axis == axis)
  }
}

/// Consumer of decoded touch events, typically an input subsystem.
pub trait InputSink {
  /// Make the device visible to consumers.
  fn register(&mut self, device: &InputDevice) -> Result<(), ErrorKind>;

  fn unregister(&mut self);

  fn report(&mut self, event: InputEvent);
}
