//! Seeded uniform random doubles for numerical simulations.
//!
//! [`RandomSource`] owns an MT19937-64 engine and draws doubles in
//! `[0.0, 1.0)` that match the C++ `std::mt19937_64` +
//! `std::uniform_real_distribution<double>` pair for the same seed.
//!
//! Foreign runtimes use the handle-based C functions in [`ffi`]
//! (`random_construct`, `random_get_number`, `random_destroy`, ...). Rust
//! callers use [`RandomSource`] directly and let it drop.
//!
//! ```
//! use mt_random::RandomSource;
//!
//! let mut a = RandomSource::new(42);
//! let mut b = RandomSource::new(42);
//! let x = a.next_value();
//! assert!((0.0..1.0).contains(&x));
//! assert_eq!(x, b.next_value());
//! ```

pub mod distribution;
pub mod error;
pub mod ffi;
pub mod handle;
pub mod mt;
pub mod source;
pub mod utils;

pub use distribution::UniformReal;
pub use error::{Error, Result, Status};
pub use source::RandomSource;
