//! Individual value generators.
//!
//! Each generator takes the RNG explicitly so it can be tested with a
//! seeded `StdRng` independently of the `Faker` lock.

pub mod numeric;
pub mod text;
pub mod uuid;
