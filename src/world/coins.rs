use crate::error::{WorldError, WorldResult};
use rand::Rng;

/// Which cells of the board still hold a coin. Cells only ever go from full to empty.
#[derive(Debug, Clone)]
pub struct CoinMap {
  width: usize,
  height: usize,
  // Column-major: cell (x, y) lives at x * height + y
  cells: Vec<bool>,
}

impl CoinMap {
  /// Draws every cell independently, placing a coin when a uniform draw in `[0, 1)` falls below
  /// `coin_probability`.
  pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    coin_probability: f64,
    rng: &mut R,
  ) -> CoinMap {
    let mut cells = Vec::with_capacity(width * height);
    for _x in 0..width {
      for _y in 0..height {
        cells.push(rng.gen::<f64>() < coin_probability);
      }
    }
    CoinMap { width, height, cells }
  }

  fn index(&self, x: usize, y: usize) -> WorldResult<usize> {
    if x < self.width && y < self.height {
      Ok(x * self.height + y)
    } else {
      Err(WorldError::InvalidCoordinate { x, y })
    }
  }

  pub fn has_coin(&self, x: usize, y: usize) -> WorldResult<bool> {
    let i = self.index(x, y)?;
    Ok(self.cells[i])
  }

  /// Removes the coin at (x, y) if there is one. Returns how many coins were taken, so a second
  /// call on the same cell always yields 0.
  pub fn take(&mut self, x: usize, y: usize) -> WorldResult<u32> {
    let i = self.index(x, y)?;
    if self.cells[i] {
      self.cells[i] = false;
      Ok(1)
    } else {
      Ok(0)
    }
  }

  pub fn remaining(&self) -> usize {
    self.cells.iter().filter(|&&c| c).count()
  }
}
