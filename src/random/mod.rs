//! Random-draw primitives shared by every generator
//!
//! Nothing here owns global state: callers hold the generator (usually a
//! [`rand::rngs::StdRng`] from [`seeded`]) and pass it down by `&mut`.

mod numeric;
mod weighted;
mod combinatorics;
mod seed;

pub use numeric::Numeric;
pub use weighted::{WeightedRng, LINEAR_SKEW_LIMIT};
pub use combinatorics::{partition, permutation, shuffle};
pub use seed::{case_seed, seed_from_args, seeded};
