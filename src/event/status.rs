use bitfield_struct::bitfield;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mtl2, Reg};

/// `TD_STATUS`: number of contacts currently detected.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchStatus {
  #[bits(4)]
  pub points: u8,
  #[bits(4)]
  __: u8,
}

impl TouchStatus {
  pub const fn is_touched(&self) -> bool {
    self.points() != 0
  }
}

impl<I, E> Mtl2<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Raw `DEVICE_MODE` register.
  pub async fn device_mode(&mut self) -> Result<u8, Error<E>> {
    self.read_u8(Reg::DeviceMode).await
  }

  pub async fn touch_status(&mut self) -> Result<TouchStatus, Error<E>> {
    Ok(TouchStatus::from_bits(self.read_u8(Reg::TdStatus).await?))
  }
}
