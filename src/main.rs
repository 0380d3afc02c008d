#[macro_use]
extern crate log;

use clap::Parser;
use coinworld::{Direction, Located, Person, PersonId, World};
use env_logger::{Builder, Env};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Wander a coin-strewn grid and watch people rob each other.
#[derive(Parser, Debug)]
#[command(name = "coinworld", version)]
struct Opts {
  /// Board width in cells
  #[arg(long, default_value_t = 10)]
  width: usize,
  /// Board height in cells
  #[arg(long, default_value_t = 5)]
  height: usize,
  /// Chance that any given cell starts with a coin
  #[arg(long, default_value_t = 0.3)]
  coin_probability: f64,
  /// Seed for both the coin layout and the walk. Random if omitted
  #[arg(long)]
  seed: Option<u64>,
  /// How many people to drop onto the board
  #[arg(long, default_value_t = 3)]
  people: usize,
  /// How many moves to make in total
  #[arg(long, default_value_t = 20)]
  steps: usize,
  /// Replay the two fixed walkthroughs instead of a random walk
  #[arg(long)]
  scripted: bool,
}

fn main() -> anyhow::Result<()> {
  // Set default log level to warn for everything, and info for our code
  Builder::from_env(Env::default().default_filter_or("warn,coinworld=info")).init();

  let opts = Opts::parse();
  if opts.scripted {
    empty_world_walkthrough()?;
    full_world_walkthrough()?;
  } else {
    random_walk(&opts)?;
  }
  Ok(())
}

fn report(world: &World, id: PersonId) -> anyhow::Result<()> {
  let p = world.person(id)?;
  println!("{} is at {:?} with {} coins", p.name(), p.coordinates(), p.coins());
  Ok(())
}

fn empty_world_walkthrough() -> anyhow::Result<()> {
  println!("= Empty world ================================");
  let mut world = World::new(6, 5, 0.0)?;
  let john = Person::spawn(&mut world, "John", -1, -10, 2)?;
  let sarah = Person::spawn(&mut world, "Sarah", 8, 6, 4)?;
  report(&world, john)?;
  report(&world, sarah)?;
  world.person_mut(sarah)?.north()?;
  world.person_mut(sarah)?.east()?;
  report(&world, sarah)?;

  let ryan = Person::spawn(&mut world, "Ryan", 5, 2, 1)?;
  report(&world, ryan)?;
  world.person_mut(ryan)?.north()?;
  report(&world, ryan)?;
  // Runs into Sarah
  world.person_mut(ryan)?.north()?;
  report(&world, ryan)?;
  report(&world, sarah)?;

  world.person_mut(john)?.west()?;
  world.person_mut(john)?.south()?;
  report(&world, john)
}

fn full_world_walkthrough() -> anyhow::Result<()> {
  println!("= Full world =================================");
  let mut world = World::new(10, 5, 1.0)?;
  let tanya = Person::spawn(&mut world, "Tanya", 2, 0, 2)?;
  report(&world, tanya)?;
  let caleb = Person::spawn(&mut world, "Caleb", 2, -5, 1)?;
  report(&world, caleb)?;
  report(&world, tanya)?;

  let bailey = Person::spawn(&mut world, "Bailey", -3, 0, 1)?;
  report(&world, bailey)?;
  world.person_mut(bailey)?.east()?;
  report(&world, bailey)?;
  world.person_mut(bailey)?.east()?;
  for id in &[bailey, tanya, caleb] {
    report(&world, *id)?;
  }
  Ok(())
}

fn random_walk(opts: &Opts) -> anyhow::Result<()> {
  let seed = opts.seed.unwrap_or_else(|| rand::thread_rng().gen());
  info!("Random walk with seed {}", seed);
  let mut rng = StdRng::seed_from_u64(seed);
  let mut world = World::with_rng(opts.width, opts.height, opts.coin_probability, &mut rng)?;
  println!("{} coins on a {}x{} board", world.coins_remaining(), opts.width, opts.height);

  let (w, h) = world.dimensions();
  let mut people = Vec::with_capacity(opts.people);
  for i in 0..opts.people {
    let (x, y) = (rng.gen_range(0..w as i64), rng.gen_range(0..h as i64));
    people.push(Person::spawn(&mut world, format!("Person {}", i), x, y, 0)?);
  }
  if people.is_empty() {
    warn!("Nobody to move");
    return Ok(());
  }

  for _ in 0..opts.steps {
    let who = people[rng.gen_range(0..people.len())];
    let dir: Direction = rng.gen();
    world.person_mut(who)?.step(dir)?;
  }

  let mut held = 0;
  for id in &people {
    report(&world, *id)?;
    held += world.person(*id)?.coins();
  }
  println!("{} coins held, {} left on the board", held, world.coins_remaining());
  Ok(())
}
