//! Platform services the driver binds against: bus adapters, GPIO lines,
//! interrupt lines and input-sink allocation.

use bitfield_struct::bitfield;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::driver::{BoardInfo, DriverInfo};
use crate::input::InputSink;

/// Interrupt number as handed out by the platform.
pub type Irq = u32;

/// Reason a platform request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
  /// The resource is already claimed.
  Busy,
  /// The platform cannot provide this kind of resource.
  NotSupported,
  NoDevice,
  NoMemory,
  /// Refused with a platform specific status code.
  Rejected(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
  RisingEdge,
}

/// Transfer primitives a bus adapter implements. Bit positions follow the
/// conventional `I2C_FUNC_*` flags.
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Functionality {
  /// Plain I²C-level commands (combined write/read transfers).
  pub i2c: bool,
  pub ten_bit_addr: bool,
  pub protocol_mangling: bool,
  pub smbus_pec: bool,
  pub nostart: bool,
  pub slave: bool,
  #[bits(13)]
  __: u16,
  pub smbus_read_byte_data: bool,
  pub smbus_write_byte_data: bool,
  #[bits(11)]
  ___: u16,
}

impl Functionality {
  /// Returns `true` if every primitive in `required` is available.
  pub const fn supports(&self, required: Functionality) -> bool {
    self.into_bits() & required.into_bits() == required.into_bits()
  }
}

/// Host-side controller of the bus the touch chip is attached to.
pub trait BusAdapter {
  /// Handle used for register transfers once a device is instantiated.
  type Device: I2c<SevenBitAddress>;

  fn nr(&self) -> u8;

  fn functionality(&self) -> Functionality;

  /// Instantiate the device described by `info` on this bus.
  fn new_device(&mut self, info: &BoardInfo) -> Result<Self::Device, ErrorKind>;

  fn remove_device(&mut self, info: &BoardInfo);

  fn add_driver(&mut self, driver: &DriverInfo) -> Result<(), ErrorKind>;

  fn del_driver(&mut self, driver: &DriverInfo);
}

/// The platform the driver is loaded into.
///
/// Every successful request is paired with exactly one release call by the
/// driver, either during unload or while unwinding a failed load.
pub trait Host {
  type Adapter: BusAdapter;
  /// Awaitable interrupt line returned by [`Host::request_irq`].
  type IrqLine: Wait;
  type Input: InputSink;

  fn get_adapter(&mut self, nr: u8) -> Result<Self::Adapter, ErrorKind>;

  /// Claim exclusive ownership of a GPIO line.
  fn gpio_request(&mut self, gpio: u32, label: &'static str) -> Result<(), ErrorKind>;

  fn gpio_free(&mut self, gpio: u32);

  fn gpio_to_irq(&mut self, gpio: u32) -> Result<Irq, ErrorKind>;

  fn request_irq(&mut self, irq: Irq, trigger: Trigger, name: &'static str) -> Result<Self::IrqLine, ErrorKind>;

  fn disable_irq(&mut self, irq: Irq);

  fn free_irq(&mut self, irq: Irq);

  fn allocate_input(&mut self) -> Result<Self::Input, ErrorKind>;
}
