use crate::agents::person::PersonId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
  #[error("World dimensions must be positive, got {width}x{height}")]
  InvalidDimensions { width: usize, height: usize },

  #[error("Coin probability must be within [0, 1], got {0}")]
  InvalidProbability(f64),

  #[error("Coordinate ({x}, {y}) is outside the world")]
  InvalidCoordinate { x: usize, y: usize },

  #[error("Person {0:?} cannot hold that many coins")]
  CoinOverflow(PersonId),

  #[error("No person with id {0:?} lives in this world")]
  UnknownPerson(PersonId),
}

pub type WorldResult<T> = Result<T, WorldError>;
