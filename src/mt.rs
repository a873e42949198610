//! The 64-bit Mersenne Twister engine.
//!
//! Seeding follows `std::mt19937_64`: `mt[0] = seed` and the remaining 311
//! words come from the Knuth-style multiplier recurrence, so a given seed
//! yields the same stream as the C++ standard library.

use libc::c_int;

pub type Engine = rand_mt::Mt64;

/// Seed used by `std::mt19937_64` when none is given.
pub const DEFAULT_SEED: u64 = 5489;

pub fn engine(seed: u64) -> Engine {
    Engine::new(seed)
}

/// Widens a C `int` seed the way `static_cast<uint64_t>(int)` does:
/// negative seeds are sign-extended, so `-1` becomes `u64::MAX`.
pub fn widen_seed(seed: c_int) -> u64 {
    i64::from(seed) as u64
}
