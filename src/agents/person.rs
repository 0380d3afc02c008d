use super::Located;
use crate::error::{WorldError, WorldResult};
use crate::util::{direction::Direction, Coords};
use crate::world::World;
use std::mem;

/// Handle to a person living in a `World`'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub usize);

/// Someone wandering the world with a purse of coins.
#[derive(new, Located, Debug, Clone, PartialEq)]
pub struct Person {
  id: PersonId,
  name: String,
  coords: Coords,
  coins: u32,
}

impl Person {
  /// Creates a person in `world` at the cell nearest to (x, y), registers them, and lets them
  /// look around their starting cell. They may pick up a coin or rob whoever is already there
  /// before this returns.
  pub fn spawn<S: Into<String>>(
    world: &mut World,
    name: S,
    x: i64,
    y: i64,
    coins: u32,
  ) -> WorldResult<PersonId> {
    let name = name.into();
    let coords = world.clamp(x, y);
    debug!("Spawning {} at {:?} (asked for ({}, {}))", name, coords, x, y);
    let id = world.insert_person(|id| Person::new(id, name, coords, coins));
    world.add_person(id);
    check_location(world, id)?;
    Ok(id)
  }

  pub fn id(&self) -> PersonId {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn coins(&self) -> u32 {
    self.coins
  }

  /// Empties this person's purse, returning what was in it.
  pub fn lose_coins(&mut self) -> u32 {
    mem::replace(&mut self.coins, 0)
  }
}

/// A person together with mutable access to their world, so they can move around in it.
pub struct PersonMut<'w> {
  world: &'w mut World,
  id: PersonId,
}

impl<'w> PersonMut<'w> {
  pub(crate) fn new(world: &'w mut World, id: PersonId) -> PersonMut<'w> {
    PersonMut { world, id }
  }

  pub fn person(&self) -> WorldResult<&Person> {
    self.world.person(self.id)
  }

  pub fn north(&mut self) -> WorldResult<u32> {
    self.step(Direction::North)
  }

  pub fn south(&mut self) -> WorldResult<u32> {
    self.step(Direction::South)
  }

  pub fn east(&mut self) -> WorldResult<u32> {
    self.step(Direction::East)
  }

  pub fn west(&mut self) -> WorldResult<u32> {
    self.step(Direction::West)
  }

  /// Moves one cell in `dir` unless that would leave the board, then looks around the cell
  /// either way. Returns the coins held afterwards.
  pub fn step(&mut self, dir: Direction) -> WorldResult<u32> {
    let dims = self.world.dimensions();
    let me = self.world.person_entry(self.id)?;
    match dir.step(me.coords, dims) {
      Some(next) => me.coords = next,
      None => trace!("{} is blocked moving {:?} from {:?}", me.name, dir, me.coords),
    }
    check_location(self.world, self.id)
  }
}

/// Picks up the coin on the person's cell if there is one. Otherwise robs everybody else
/// standing on the same cell. Returns the person's coins afterwards.
///
/// Nothing changes hands if the person's purse could not hold the proceeds.
pub(crate) fn check_location(world: &mut World, id: PersonId) -> WorldResult<u32> {
  let (here, purse) = {
    let me = world.person(id)?;
    (me.coords(), me.coins)
  };
  if purse == u32::MAX && world.has_coin(here.x, here.y)? {
    return Err(WorldError::CoinOverflow(id));
  }
  if world.pickup_coin(here.x, here.y)? == 1 {
    let me = world.person_entry(id)?;
    me.coins = purse + 1;
    debug!("{} picked up a coin at {:?}, now has {}", me.name, here, me.coins);
    return Ok(me.coins);
  }

  let mut victims = Vec::new();
  let mut total = purse;
  for other in world.people() {
    if other == id {
      continue;
    }
    let victim = world.person(other)?;
    if victim.shares_cell_with(&here) {
      total = total.checked_add(victim.coins).ok_or(WorldError::CoinOverflow(id))?;
      victims.push(other);
    }
  }

  for other in victims {
    let victim = world.person_entry(other)?;
    let taken = victim.lose_coins();
    if taken > 0 {
      info!("{} lost {} coins at {:?}", victim.name, taken, here);
    }
  }
  let me = world.person_entry(id)?;
  me.coins = total;
  if total > purse {
    info!("{} robbed {} coins at {:?}, now has {}", me.name, total - purse, here, me.coins);
  }
  Ok(me.coins)
}
