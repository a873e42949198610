//! Uniform real distribution over a half-open interval.
//!
//! One 64-bit engine output `x` becomes the canonical value `x * 2^-64`
//! (with `x` rounded to the nearest double first). Rounding can push that
//! to exactly `1.0`; it is then replaced by the largest double below one.
//! A `[low, high)` range scales the canonical value as `u * (high - low) +
//! low`. This is the libstdc++ `uniform_real_distribution<double>` recipe
//! for a 64-bit engine, so draws agree with it bit for bit.

use rand::distributions::Distribution;
use rand::Rng;

use crate::{Error, Result};

/// 2^-64, exact in `f64`.
const SCALE: f64 = 1.0 / 18446744073709551616.0;

/// The largest `f64` strictly below `1.0`.
pub const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Maps one raw 64-bit output to a double in `[0.0, 1.0)`.
#[inline]
pub fn canonical(bits: u64) -> f64 {
    let value = bits as f64 * SCALE;
    if value < 1.0 {
        value
    } else {
        LARGEST_BELOW_ONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformReal {
    low: f64,
    high: f64,
}

impl UniformReal {
    /// The unit interval `[0.0, 1.0)`.
    pub const UNIT: Self = Self { low: 0.0, high: 1.0 };

    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low.is_finite() && high.is_finite() && low < high {
            Ok(Self { low, high })
        } else {
            Err(Error::InvalidRange { low, high })
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for UniformReal {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Distribution<f64> for UniformReal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        canonical(rng.next_u64()) * (self.high - self.low) + self.low
    }
}
