use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::input::{AbsAxis, InputEvent, Key};
use crate::{Error, Mtl2};

mod status;
mod touchpoint;

pub use status::*;
pub use touchpoint::*;

impl<I, E> Mtl2<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Sample the first touch slot, the only one the interrupt path reports.
  pub async fn primary_touch(&mut self) -> Result<Point, Error<E>> {
    self.point(Slot::P1).await
  }
}

/// Events making up one reportable frame for a sampled contact.
///
/// The contact is always reported as down: the controller's lift-off is never
/// translated into a release.
pub fn frame(point: Point) -> [InputEvent; 4] {
  [
    InputEvent::Abs(AbsAxis::X, point.x as i32),
    InputEvent::Abs(AbsAxis::Y, point.y as i32),
    InputEvent::Key(Key::Touch, true),
    InputEvent::Sync,
  ]
}
