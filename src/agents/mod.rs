use crate::util::Coords;

pub mod person;

/// Anything that occupies a cell of the world. Usually derived with `#[derive(Located)]`, which
/// picks up the struct's `Coords` field.
pub trait Located {
  fn coords(&self) -> Coords;

  fn coordinates(&self) -> (usize, usize) {
    let c = self.coords();
    (c.x, c.y)
  }

  fn shares_cell_with<L: Located + ?Sized>(&self, other: &L) -> bool {
    self.coords() == other.coords()
  }
}

impl Located for Coords {
  fn coords(&self) -> Coords {
    *self
  }
}
