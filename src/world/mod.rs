use crate::agents::person::{Person, PersonId, PersonMut};
use crate::error::{WorldError, WorldResult};
use crate::util::{clamp_axis, Coords};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::collections::HashSet;

pub mod coins;

use self::coins::CoinMap;

/// The entire world. Owns the board, its coins, and every person living on it.
///
/// People are stored in an arena and referred to by `PersonId`. The world keeps track of who is
/// registered, but not where anybody is; people track their own position.
#[derive(Debug)]
pub struct World {
  width: usize,
  height: usize,
  coins: CoinMap,
  people: HashSet<PersonId>,
  arena: Vec<Person>,
}

impl World {
  /// Builds a world whose coins are drawn from the thread-local RNG.
  pub fn new(width: usize, height: usize, coin_probability: f64) -> WorldResult<World> {
    World::with_rng(width, height, coin_probability, &mut thread_rng())
  }

  /// Builds a world whose coin layout is fully determined by `seed`.
  pub fn with_seed(
    width: usize,
    height: usize,
    coin_probability: f64,
    seed: u64,
  ) -> WorldResult<World> {
    World::with_rng(width, height, coin_probability, &mut StdRng::seed_from_u64(seed))
  }

  pub fn with_rng<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    coin_probability: f64,
    rng: &mut R,
  ) -> WorldResult<World> {
    if width == 0 || height == 0 || width.checked_mul(height).is_none() {
      return Err(WorldError::InvalidDimensions { width, height });
    }
    // Written this way round so NaN is rejected too
    if !(0.0..=1.0).contains(&coin_probability) {
      return Err(WorldError::InvalidProbability(coin_probability));
    }
    let coins = CoinMap::generate(width, height, coin_probability, rng);
    debug!(
      "Generated {}x{} world with {} coins",
      width,
      height,
      coins.remaining()
    );
    Ok(World {
      width,
      height,
      coins,
      people: HashSet::new(),
      arena: Vec::new(),
    })
  }

  pub fn dimensions(&self) -> (usize, usize) {
    (self.width, self.height)
  }

  /// Pulls a possibly out-of-bounds position onto the nearest cell of the board.
  pub fn clamp(&self, x: i64, y: i64) -> Coords {
    Coords::new(clamp_axis(x, self.width), clamp_axis(y, self.height))
  }

  /// Registers a person with the world. Returns false if they were already registered.
  pub fn add_person(&mut self, id: PersonId) -> bool {
    self.people.insert(id)
  }

  /// A snapshot of everyone registered. Iteration order is unspecified.
  pub fn people(&self) -> HashSet<PersonId> {
    self.people.clone()
  }

  /// Takes the coin at (x, y) if there is one, returning the number of coins taken (0 or 1).
  pub fn pickup_coin(&mut self, x: usize, y: usize) -> WorldResult<u32> {
    self.coins.take(x, y)
  }

  pub fn has_coin(&self, x: usize, y: usize) -> WorldResult<bool> {
    self.coins.has_coin(x, y)
  }

  pub fn coins_remaining(&self) -> usize {
    self.coins.remaining()
  }

  pub fn person(&self, id: PersonId) -> WorldResult<&Person> {
    self.arena.get(id.0).ok_or(WorldError::UnknownPerson(id))
  }

  /// A handle through which the given person can act on this world.
  pub fn person_mut(&mut self, id: PersonId) -> WorldResult<PersonMut<'_>> {
    self.person(id)?;
    Ok(PersonMut::new(self, id))
  }

  pub(crate) fn person_entry(&mut self, id: PersonId) -> WorldResult<&mut Person> {
    self.arena.get_mut(id.0).ok_or(WorldError::UnknownPerson(id))
  }

  /// Stores a new person in the arena, handing the builder the id they will live under.
  pub(crate) fn insert_person<F>(&mut self, build: F) -> PersonId
  where
    F: FnOnce(PersonId) -> Person,
  {
    let id = PersonId(self.arena.len());
    self.arena.push(build(id));
    id
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn rejects_empty_dimensions() {
    assert_eq!(
      World::new(0, 5, 0.5).unwrap_err(),
      WorldError::InvalidDimensions { width: 0, height: 5 }
    );
    assert_eq!(
      World::new(3, 0, 0.5).unwrap_err(),
      WorldError::InvalidDimensions { width: 3, height: 0 }
    );
    assert_eq!(
      World::new(usize::MAX, 2, 0.0).unwrap_err(),
      WorldError::InvalidDimensions { width: usize::MAX, height: 2 }
    );
  }

  #[test]
  fn rejects_probability_outside_unit_range() {
    assert_eq!(World::new(3, 3, 1.5).unwrap_err(), WorldError::InvalidProbability(1.5));
    assert_eq!(World::new(3, 3, -0.1).unwrap_err(), WorldError::InvalidProbability(-0.1));
    assert!(World::new(3, 3, std::f64::NAN).is_err());
  }

  #[test]
  fn seeded_worlds_share_a_layout() {
    let a = World::with_seed(12, 9, 0.4, 99).unwrap();
    let b = World::with_seed(12, 9, 0.4, 99).unwrap();
    for x in 0..12 {
      for y in 0..9 {
        assert_eq!(a.has_coin(x, y), b.has_coin(x, y));
      }
    }
    assert_eq!(a.coins_remaining(), b.coins_remaining());
  }

  #[test]
  fn pickup_then_nothing() {
    let mut world = World::new(6, 5, 1.0).unwrap();
    assert_eq!(world.dimensions(), (6, 5));
    assert_eq!(world.pickup_coin(5, 4), Ok(1));
    assert_eq!(world.pickup_coin(5, 4), Ok(0));
    assert_eq!(world.coins_remaining(), 29);
    assert_eq!(world.pickup_coin(6, 4), Err(WorldError::InvalidCoordinate { x: 6, y: 4 }));
  }

  #[test]
  fn clamps_to_nearest_cell() {
    let world = World::new(6, 5, 0.0).unwrap();
    assert_eq!(world.clamp(-1, -10), Coords::new(0, 0));
    assert_eq!(world.clamp(8, 6), Coords::new(5, 4));
    assert_eq!(world.clamp(2, 3), Coords::new(2, 3));
  }

  #[test]
  fn registration_is_idempotent_and_snapshots_are_copies() {
    let mut world = World::new(4, 4, 0.0).unwrap();
    let id = world.insert_person(|id| Person::new(id, "Ann".to_string(), Coords::new(0, 0), 0));
    assert!(world.add_person(id));
    assert!(!world.add_person(id));
    let mut snapshot = world.people();
    assert_eq!(snapshot.len(), 1);
    snapshot.clear();
    assert_eq!(world.people().len(), 1);
  }

  #[test]
  fn unknown_people_are_errors() {
    let mut world = World::new(2, 2, 0.0).unwrap();
    assert_eq!(world.person(PersonId(3)).unwrap_err(), WorldError::UnknownPerson(PersonId(3)));
    assert!(world.person_mut(PersonId(0)).is_err());
  }
}
