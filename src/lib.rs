#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` driver for the MTL2 capacitive touchscreen controller.
//!
//! The controller sits at I²C address `0x38` and raises a data-ready
//! interrupt whenever it has a new sample. This crate provides:
//!
//! - [`Mtl2`], a register-level handle that samples and decodes the 12-bit
//!   touch coordinates
//! - [`Mtl2::handle_interrupt`], which publishes one contact as an
//!   absolute-X / absolute-Y / touch frame to an [`InputSink`]
//! - [`Mtl2Module`], which binds the driver into a [`Host`] platform: it
//!   claims the interrupt GPIO, maps and requests the IRQ, checks the bus
//!   adapter and registers the input device, and releases all of it again on
//!   unload
//!
//! Only the first of the five contact slots is reported, and a lifted finger
//! is never reported as released.
//!
//! ```no_run
//! use mtl2_touchscreen::{Host, Mtl2Module};
//!
//! async fn example<H: Host>(host: H) {
//!   let mut module = Mtl2Module::new(host);
//!   if module.load().is_ok() {
//!     let _ = module.run().await;
//!   }
//! }
//! ```
#[macro_use]
mod fmt;

mod driver;
mod event;
mod host;
mod input;
mod irq;
mod lifecycle;
mod reg;
mod rw;

#[cfg(test)]
mod mock;

pub use driver::*;
pub use event::*;
pub use host::*;
pub use input::*;
pub use irq::IrqReturn;
pub use lifecycle::{LifecycleState, Mtl2Module, Resource};
pub use reg::{ADAPTER_NR, DEVICE_NAME, I2C_ADDR, INPUT_NAME, INT_GPIO, IRQ_NAME, MAX_X, MAX_Y};
use reg::Reg;

/// Errors that can occur while binding to or talking with the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// The platform refused a resource the driver needs.
  ResourceUnavailable(Resource, ErrorKind),
  /// The bus adapter lacks transfer primitives the driver relies on.
  CapabilityMissing(Functionality),
  /// The driver's id table has no entry for the instantiated device.
  NoMatchingDevice,
  /// Waiting on the interrupt line failed.
  Interrupt(embedded_hal::digital::ErrorKind),
  /// The operation is not valid in the current lifecycle state.
  InvalidState(LifecycleState),
}

/// Register-level handle to the controller.
///
/// Owns the I²C device and knows the address it answers on. All reads go
/// through `write_read`, so the handle works with any `embedded-hal-async`
/// bus implementation.
pub struct Mtl2<I> {
  i2c: I,
  address: u8,
}

impl<I> Mtl2<I> {
  /// Create a handle for a controller at the default address [`I2C_ADDR`].
  pub fn new(i2c: I) -> Self {
    Self::with_address(i2c, I2C_ADDR)
  }

  /// Create a handle for a controller strapped to another address.
  pub fn with_address(i2c: I, address: u8) -> Self {
    Self { i2c, address }
  }

  /// 7-bit address the handle talks to.
  pub fn address(&self) -> u8 {
    self.address
  }

  /// Give back the bus device.
  pub fn release(self) -> I {
    self.i2c
  }
}
