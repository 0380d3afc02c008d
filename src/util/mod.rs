extern crate nalgebra as na;

pub mod direction;

/// A cell on the board. Always within `[0, width) x [0, height)` of the world it belongs to.
pub type Coords = na::Point2<usize>;

/// Clamps a signed coordinate into `[0, len - 1]`. `len` must be positive.
pub fn clamp_axis(v: i64, len: usize) -> usize {
  let max = len.saturating_sub(1) as i64;
  v.max(0).min(max) as usize
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn clamp_axis_pins_both_ends() {
    assert_eq!(clamp_axis(-10, 5), 0);
    assert_eq!(clamp_axis(8, 6), 5);
    assert_eq!(clamp_axis(3, 6), 3);
    assert_eq!(clamp_axis(0, 1), 0);
  }
}
