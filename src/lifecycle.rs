use core::convert::Infallible;

use embedded_hal::digital::Error as _;
use embedded_hal_async::digital::Wait;

use crate::driver::{BoardInfo, DeviceId, BOARD_INFO, DRIVER};
use crate::host::{BusAdapter, ErrorKind, Functionality, Host, Irq, Trigger};
use crate::input::{InputDevice, InputSink};
use crate::{Error, IrqReturn, Mtl2, ADAPTER_NR, DEVICE_NAME, INT_GPIO, IRQ_NAME};

type Device<H> = <<H as Host>::Adapter as BusAdapter>::Device;
type BusError<H> = <Device<H> as embedded_hal::i2c::ErrorType>::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LifecycleState {
  Unloaded,
  Initializing,
  Bound,
  Unloading,
}

/// Platform resource a failed request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
  Adapter,
  Device,
  Driver,
  Gpio,
  IrqMapping,
  Irq,
  InputDevice,
  InputRegistration,
}

/// Everything a bound driver owns, handed to the interrupt path.
struct Bound<H: Host> {
  device: Mtl2<Device<H>>,
  input: H::Input,
  irq: Irq,
  line: H::IrqLine,
}

/// Releases what probe has claimed so far unless disarmed.
struct Claims<'a, H: Host> {
  host: &'a mut H,
  gpio: Option<u32>,
  irq: Option<Irq>,
}

impl<'a, H: Host> Claims<'a, H> {
  fn new(host: &'a mut H) -> Self {
    Self { host, gpio: None, irq: None }
  }

  fn disarm(&mut self) {
    self.gpio = None;
    self.irq = None;
  }
}

impl<H: Host> Drop for Claims<'_, H> {
  fn drop(&mut self) {
    if let Some(irq) = self.irq.take() {
      self.host.free_irq(irq);
    }
    if let Some(gpio) = self.gpio.take() {
      self.host.gpio_free(gpio);
    }
  }
}

/// Owns the driver from load to unload.
///
/// [`Mtl2Module::load`] instantiates the controller on bus adapter
/// [`ADAPTER_NR`], registers the driver and binds the data-ready interrupt.
/// Acquisition is all-or-nothing: a failing step releases everything taken
/// before it. [`Mtl2Module::unload`] (also run on drop) gives it all back.
pub struct Mtl2Module<H: Host> {
  host: H,
  state: LifecycleState,
  adapter: Option<H::Adapter>,
  bound: Option<Bound<H>>,
}

impl<H: Host> Mtl2Module<H> {
  pub fn new(host: H) -> Self {
    Self { host, state: LifecycleState::Unloaded, adapter: None, bound: None }
  }

  pub fn state(&self) -> LifecycleState {
    self.state
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  /// Interrupt number the handler is bound to.
  pub fn irq(&self) -> Option<Irq> {
    self.bound.as_ref().map(|b| b.irq)
  }

  pub fn input(&self) -> Option<&H::Input> {
    self.bound.as_ref().map(|b| &b.input)
  }

  fn unavailable(resource: Resource, kind: ErrorKind) -> Error<BusError<H>> {
    error!("{:?} request failure: {:?}", resource, kind);
    Error::ResourceUnavailable(resource, kind)
  }

  pub fn load(&mut self) -> Result<(), Error<BusError<H>>> {
    if self.state != LifecycleState::Unloaded {
      return Err(Error::InvalidState(self.state));
    }

    info!("Inserting module");
    self.state = LifecycleState::Initializing;

    match self.bring_up() {
      Ok((adapter, bound)) => {
        self.adapter = Some(adapter);
        self.bound = Some(bound);
        self.state = LifecycleState::Bound;
        Ok(())
      }
      Err(e) => {
        self.state = LifecycleState::Unloaded;
        Err(e)
      }
    }
  }

  fn bring_up(&mut self) -> Result<(H::Adapter, Bound<H>), Error<BusError<H>>> {
    let mut adapter = self.host.get_adapter(ADAPTER_NR).map_err(|k| Self::unavailable(Resource::Adapter, k))?;
    let client = adapter.new_device(&BOARD_INFO).map_err(|k| Self::unavailable(Resource::Device, k))?;

    if let Err(k) = adapter.add_driver(&DRIVER) {
      adapter.remove_device(&BOARD_INFO);
      return Err(Self::unavailable(Resource::Driver, k));
    }

    let probed = match DRIVER.match_id(&BOARD_INFO) {
      Some(id) => Self::probe(&mut self.host, &adapter, client, &BOARD_INFO, id),
      None => Err(Error::NoMatchingDevice),
    };

    match probed {
      Ok(bound) => Ok((adapter, bound)),
      Err(e) => {
        adapter.del_driver(&DRIVER);
        adapter.remove_device(&BOARD_INFO);
        Err(e)
      }
    }
  }

  fn probe(
    host: &mut H,
    adapter: &H::Adapter,
    client: Device<H>,
    info: &BoardInfo,
    id: &DeviceId,
  ) -> Result<Bound<H>, Error<BusError<H>>> {
    debug!("probing {} on adapter {}", id.name, adapter.nr());
    let mut claims = Claims::new(host);

    claims.host.gpio_request(INT_GPIO, DEVICE_NAME).map_err(|k| Self::unavailable(Resource::Gpio, k))?;
    claims.gpio = Some(INT_GPIO);

    let irq = claims.host.gpio_to_irq(INT_GPIO).map_err(|k| Self::unavailable(Resource::IrqMapping, k))?;
    info!("Mapped int {}", irq);

    let line = claims
      .host
      .request_irq(irq, Trigger::RisingEdge, IRQ_NAME)
      .map_err(|k| Self::unavailable(Resource::Irq, k))?;
    claims.irq = Some(irq);

    let required = Functionality::new().with_i2c(true);
    if !adapter.functionality().supports(required) {
      error!("adapter {} lacks plain I2C transfers", adapter.nr());
      return Err(Error::CapabilityMissing(required));
    }

    let mut input = claims.host.allocate_input().map_err(|k| Self::unavailable(Resource::InputDevice, k))?;
    input.register(&InputDevice::touchscreen()).map_err(|k| Self::unavailable(Resource::InputRegistration, k))?;

    claims.disarm();
    Ok(Bound { device: Mtl2::with_address(client, info.addr), input, irq, line })
  }

  /// Release everything [`Mtl2Module::load`] acquired, in reverse order.
  pub fn unload(&mut self) {
    if self.state != LifecycleState::Bound {
      return;
    }

    info!("Removing module");
    self.state = LifecycleState::Unloading;

    if let Some(Bound { device, mut input, irq, line }) = self.bound.take() {
      // Nothing may service the line once its handles start going away.
      self.host.disable_irq(irq);
      self.host.free_irq(irq);
      drop(line);
      self.host.gpio_free(INT_GPIO);
      input.unregister();
      drop(device);
    }

    if let Some(mut adapter) = self.adapter.take() {
      adapter.remove_device(&BOARD_INFO);
      adapter.del_driver(&DRIVER);
    }

    self.state = LifecycleState::Unloaded;
  }

  /// Wait for the next data-ready edge and service it.
  pub async fn next_interrupt(&mut self) -> Result<IrqReturn, Error<BusError<H>>> {
    let Some(bound) = self.bound.as_mut() else {
      return Err(Error::InvalidState(self.state));
    };

    bound.line.wait_for_rising_edge().await.map_err(|e| Error::Interrupt(e.kind()))?;
    Ok(bound.device.handle_interrupt(&mut bound.input).await)
  }

  /// Service interrupts until the line reports an error.
  pub async fn run(&mut self) -> Result<Infallible, Error<BusError<H>>> {
    loop {
      self.next_interrupt().await?;
    }
  }
}

impl<H: Host> Drop for Mtl2Module<H> {
  fn drop(&mut self) {
    self.unload();
  }
}
