use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Mtl2, Reg};

/// Rebuild a 12-bit coordinate from its register pair.
///
/// The low byte supplies bits 0..=7 and the low nibble of the high byte
/// supplies bits 8..=11. The upper nibble of `msb` carries event flags and is
/// discarded.
#[inline]
pub const fn decode_coord(msb: u8, lsb: u8) -> u16 {
  ((msb & 0x0F) as u16) << 8 | lsb as u16
}

/// One of the five contact slots the controller exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
  P1,
  P2,
  P3,
  P4,
  P5,
}

impl Slot {
  pub const ALL: [Slot; 5] = [Slot::P1, Slot::P2, Slot::P3, Slot::P4, Slot::P5];

  /// First register (`XH`) of the slot's four coordinate registers.
  pub(crate) const fn base(self) -> Reg {
    match self {
      Slot::P1 => Reg::Touch1Xh,
      Slot::P2 => Reg::Touch2Xh,
      Slot::P3 => Reg::Touch3Xh,
      Slot::P4 => Reg::Touch4Xh,
      Slot::P5 => Reg::Touch5Xh,
    }
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
  pub x: u16,
  pub y: u16,
}

impl Point {
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }

  /// Decode `XH, XL, YH, YL` as laid out on the device.
  pub const fn from_regs(regs: [u8; 4]) -> Self {
    Self::new(decode_coord(regs[0], regs[1]), decode_coord(regs[2], regs[3]))
  }
}

impl core::fmt::Debug for Point {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

impl<I, E> Mtl2<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read the X/Y registers of `slot` in a single transfer and decode them.
  pub async fn point(&mut self, slot: Slot) -> Result<Point, Error<E>> {
    let mut regs = [0u8; 4];
    self.read_bytes(slot.base(), &mut regs).await?;
    Ok(Point::from_regs(regs))
  }
}
