use super::Coords;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Compass directions a person can step in. North is `+y`, east is `+x`.
#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash)]
pub enum Direction {
  North,
  East,
  South,
  West,
}

impl Direction {
  pub fn compass() -> &'static [Direction; 4] {
    static DIRECTIONS: [Direction; 4] = [
      Direction::North,
      Direction::East,
      Direction::South,
      Direction::West,
    ];
    &DIRECTIONS
  }

  /// The cell one step away from `from`, or `None` if that step would leave a board of the
  /// given dimensions.
  pub fn step(&self, from: Coords, (width, height): (usize, usize)) -> Option<Coords> {
    let (x, y) = (from.x, from.y);
    match *self {
      Direction::North if y + 1 < height => Some(Coords::new(x, y + 1)),
      Direction::East if x + 1 < width => Some(Coords::new(x + 1, y)),
      Direction::South if y > 0 => Some(Coords::new(x, y - 1)),
      Direction::West if x > 0 => Some(Coords::new(x - 1, y)),
      _ => None,
    }
  }
}

impl Distribution<Direction> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
    Direction::compass()[rng.gen_range(0..4)]
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn steps_inside_the_board() {
    let from = Coords::new(2, 2);
    assert_eq!(Direction::North.step(from, (5, 5)), Some(Coords::new(2, 3)));
    assert_eq!(Direction::East.step(from, (5, 5)), Some(Coords::new(3, 2)));
    assert_eq!(Direction::South.step(from, (5, 5)), Some(Coords::new(2, 1)));
    assert_eq!(Direction::West.step(from, (5, 5)), Some(Coords::new(1, 2)));
  }

  #[test]
  fn blocked_at_every_edge() {
    assert_eq!(Direction::North.step(Coords::new(5, 4), (6, 5)), None);
    assert_eq!(Direction::East.step(Coords::new(5, 4), (6, 5)), None);
    assert_eq!(Direction::South.step(Coords::new(0, 0), (6, 5)), None);
    assert_eq!(Direction::West.step(Coords::new(0, 0), (6, 5)), None);
  }
}
