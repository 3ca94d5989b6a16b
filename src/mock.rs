//! Test doubles for the platform traits.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use embedded_hal::digital::ErrorType;
use embedded_hal_async::digital::Wait;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

use crate::driver::{BoardInfo, DriverInfo};
use crate::host::{BusAdapter, ErrorKind, Functionality, Host, Irq, Trigger};
use crate::input::{InputDevice, InputEvent, InputSink};

pub(crate) fn init_log() {
  let _ = env_logger::builder().filter_level(log::LevelFilter::Debug).is_test(true).try_init();
}

/// Sink that keeps every reported event.
#[derive(Default)]
pub(crate) struct RecordingSink {
  pub events: Vec<InputEvent>,
}

impl RecordingSink {
  pub fn frames(&self) -> usize {
    self.events.iter().filter(|e| **e == InputEvent::Sync).count()
  }
}

impl InputSink for RecordingSink {
  fn register(&mut self, _device: &InputDevice) -> Result<(), ErrorKind> {
    Ok(())
  }

  fn unregister(&mut self) {}

  fn report(&mut self, event: InputEvent) {
    self.events.push(event);
  }
}

/// Everything the fake platform hands out, observable from tests.
#[derive(Default)]
pub(crate) struct HostState {
  // Knobs
  pub no_adapter: bool,
  pub functionality: Option<Functionality>,
  pub irq_unmappable: bool,
  pub irq_refused: bool,
  pub input_alloc_fails: bool,
  pub input_register_fails: bool,
  pub bus: Vec<I2cTransaction>,

  // Observations
  pub gpio_claimed: BTreeSet<u32>,
  pub irq_map_calls: usize,
  pub irqs_requested: BTreeSet<Irq>,
  pub irqs_enabled: BTreeSet<Irq>,
  pub trigger: Option<Trigger>,
  pub adapters_held: usize,
  pub devices: Vec<BoardInfo>,
  pub drivers: Vec<&'static str>,
  pub input_registered: Option<InputDevice>,
  pub events: Vec<InputEvent>,
  pub mocks: Vec<I2cMock>,
  /// Release calls, in the order they were made.
  pub released: Vec<&'static str>,
}

impl HostState {
  pub fn owns_nothing(&self) -> bool {
    self.gpio_claimed.is_empty()
      && self.irqs_requested.is_empty()
      && self.irqs_enabled.is_empty()
      && self.adapters_held == 0
      && self.devices.is_empty()
      && self.drivers.is_empty()
      && self.input_registered.is_none()
  }
}

#[derive(Clone, Default)]
pub(crate) struct FakeHost {
  pub state: Rc<RefCell<HostState>>,
}

impl FakeHost {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(f: impl FnOnce(&mut HostState)) -> Self {
    let host = Self::new();
    f(&mut host.state.borrow_mut());
    host
  }

  /// Check every bus expectation was consumed.
  pub fn done(&self) {
    for mock in self.state.borrow_mut().mocks.iter_mut() {
      mock.done();
    }
  }
}

pub(crate) struct FakeAdapter {
  nr: u8,
  state: Rc<RefCell<HostState>>,
}

impl Drop for FakeAdapter {
  fn drop(&mut self) {
    self.state.borrow_mut().adapters_held -= 1;
  }
}

impl BusAdapter for FakeAdapter {
  type Device = I2cMock;

  fn nr(&self) -> u8 {
    self.nr
  }

  fn functionality(&self) -> Functionality {
    let state = self.state.borrow();
    state.functionality.unwrap_or_else(|| Functionality::new().with_i2c(true).with_smbus_read_byte_data(true))
  }

  fn new_device(&mut self, info: &BoardInfo) -> Result<I2cMock, ErrorKind> {
    let mut state = self.state.borrow_mut();
    let mock = I2cMock::new(&state.bus);
    state.mocks.push(mock.clone());
    state.devices.push(*info);
    Ok(mock)
  }

  fn remove_device(&mut self, info: &BoardInfo) {
    let mut state = self.state.borrow_mut();
    state.released.push("remove_device");
    state.devices.retain(|d| d != info);
  }

  fn add_driver(&mut self, driver: &DriverInfo) -> Result<(), ErrorKind> {
    self.state.borrow_mut().drivers.push(driver.name);
    Ok(())
  }

  fn del_driver(&mut self, driver: &DriverInfo) {
    let mut state = self.state.borrow_mut();
    state.released.push("del_driver");
    state.drivers.retain(|d| *d != driver.name);
  }
}

/// Interrupt line whose edge has always just fired.
pub(crate) struct FakeIrqLine;

impl ErrorType for FakeIrqLine {
  type Error = core::convert::Infallible;
}

impl Wait for FakeIrqLine {
  async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }
}

pub(crate) struct FakeInput {
  state: Rc<RefCell<HostState>>,
}

impl InputSink for FakeInput {
  fn register(&mut self, device: &InputDevice) -> Result<(), ErrorKind> {
    let mut state = self.state.borrow_mut();
    if state.input_register_fails {
      return Err(ErrorKind::Rejected(-22));
    }
    state.input_registered = Some(*device);
    Ok(())
  }

  fn unregister(&mut self) {
    let mut state = self.state.borrow_mut();
    state.released.push("unregister");
    state.input_registered = None;
  }

  fn report(&mut self, event: InputEvent) {
    self.state.borrow_mut().events.push(event);
  }
}

impl Host for FakeHost {
  type Adapter = FakeAdapter;
  type IrqLine = FakeIrqLine;
  type Input = FakeInput;

  fn get_adapter(&mut self, nr: u8) -> Result<FakeAdapter, ErrorKind> {
    let mut state = self.state.borrow_mut();
    if state.no_adapter {
      return Err(ErrorKind::NoDevice);
    }
    state.adapters_held += 1;
    Ok(FakeAdapter { nr, state: self.state.clone() })
  }

  fn gpio_request(&mut self, gpio: u32, _label: &'static str) -> Result<(), ErrorKind> {
    if self.state.borrow_mut().gpio_claimed.insert(gpio) {
      Ok(())
    } else {
      Err(ErrorKind::Busy)
    }
  }

  fn gpio_free(&mut self, gpio: u32) {
    let mut state = self.state.borrow_mut();
    state.released.push("gpio_free");
    state.gpio_claimed.remove(&gpio);
  }

  fn gpio_to_irq(&mut self, gpio: u32) -> Result<Irq, ErrorKind> {
    let mut state = self.state.borrow_mut();
    state.irq_map_calls += 1;
    if state.irq_unmappable {
      return Err(ErrorKind::NotSupported);
    }
    Ok(160 + gpio)
  }

  fn request_irq(&mut self, irq: Irq, trigger: Trigger, _name: &'static str) -> Result<FakeIrqLine, ErrorKind> {
    let mut state = self.state.borrow_mut();
    if state.irq_refused || !state.irqs_requested.insert(irq) {
      return Err(ErrorKind::NoDevice);
    }
    state.irqs_enabled.insert(irq);
    state.trigger = Some(trigger);
    Ok(FakeIrqLine)
  }

  fn disable_irq(&mut self, irq: Irq) {
    let mut state = self.state.borrow_mut();
    state.released.push("disable_irq");
    state.irqs_enabled.remove(&irq);
  }

  fn free_irq(&mut self, irq: Irq) {
    let mut state = self.state.borrow_mut();
    state.released.push("free_irq");
    state.irqs_enabled.remove(&irq);
    state.irqs_requested.remove(&irq);
  }

  fn allocate_input(&mut self) -> Result<FakeInput, ErrorKind> {
    if self.state.borrow().input_alloc_fails {
      return Err(ErrorKind::NoMemory);
    }
    Ok(FakeInput { state: self.state.clone() })
  }
}
