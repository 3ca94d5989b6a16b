use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::event::frame;
use crate::input::InputSink;
use crate::Mtl2;

/// Outcome reported back to the interrupt controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqReturn {
  Handled,
}

impl<I, E> Mtl2<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Service one data-ready interrupt.
  ///
  /// Samples touch slot 1 and publishes its position plus an active touch as a
  /// single frame. If the transfer fails nothing is published. The interrupt
  /// is acknowledged either way.
  pub async fn handle_interrupt<S: InputSink>(&mut self, input: &mut S) -> IrqReturn {
    match self.primary_touch().await {
      Ok(point) => {
        for event in frame(point) {
          input.report(event);
        }
        debug!("{}, {}", point.x, point.y);
      }
      Err(_) => warn!("touch sample dropped, bus transfer failed"),
    }

    IrqReturn::Handled
  }
}
