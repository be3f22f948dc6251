//! Seeding helpers
//!
//! Derived seeds use fixed mixers (FNV-1a, SplitMix64), so a command line or
//! base seed maps to the same stream on every toolchain. The drawn values
//! still depend on `rand`'s `StdRng`, which is only stable within a `rand`
//! release line.

use rand::rngs::StdRng;
use rand::SeedableRng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Reproducible generator for a fixed seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One SplitMix64 step
fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Seed derived from the command line, so identical invocations produce
/// identical test data
///
/// Each argument is terminated by a NUL byte before hashing, so
/// `["ab", "c"]` and `["a", "bc"]` differ.
pub fn seed_from_args<I, S>(args: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hash = FNV_OFFSET;
    for arg in args {
        for &byte in arg.as_ref().as_bytes().iter().chain(&[0]) {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    splitmix64(hash)
}

/// Independent seed for one test index under a base seed
pub fn case_seed(base: u64, index: u32) -> u64 {
    splitmix64(base ^ splitmix64(u64::from(index)))
}
