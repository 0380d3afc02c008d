//! A small grid world: a board seeded with coins, and people who wander it picking coins up and
//! robbing whoever they bump into.

#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate coinworld_derive;
#[macro_use]
extern crate log;

pub mod agents;
pub mod error;
pub mod util;
pub mod world;

pub use crate::agents::person::{Person, PersonId, PersonMut};
pub use crate::agents::Located;
pub use crate::error::{WorldError, WorldResult};
pub use crate::util::{direction::Direction, Coords};
pub use crate::world::World;
