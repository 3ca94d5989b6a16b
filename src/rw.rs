use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mtl2, Reg};

impl<I, E> Mtl2<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.read_bytes(reg, &mut b).await?;
    Ok(b[0])
  }

  /// Burst read starting at `reg`. The controller auto-increments the
  /// register pointer, so consecutive registers arrive in one transfer.
  pub(crate) async fn read_bytes(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let addr: [u8; 1] = [reg.into()];
    self.i2c.write_read(self.address, &addr, buf).await.map_err(Error::I2c)
  }
}
