use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Parses a seed written as unsigned decimal, negative decimal or `0x`
/// hexadecimal. Negative values wrap the way a C `int` seed is widened, so
/// `-1` is `u64::MAX`.
pub fn parse_seed(s: &str) -> Result<u64> {
    let t = s.trim();
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if t.starts_with('-') {
        t.parse::<i64>().ok().map(|v| v as u64)
    } else {
        t.parse::<u64>().ok()
    };
    parsed.ok_or_else(|| Error::InvalidSeed(s.to_owned()))
}

/// Data type used for command-line arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomSeed {
    /// Value of the seed.
    pub value: u64,
}

impl<'de> Deserialize<'de> for RandomSeed {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        struct SeedVisitor;

        impl<'de> Visitor<'de> for SeedVisitor {
            type Value = RandomSeed;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal or 0x-prefixed hexadecimal seed")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<RandomSeed, E> {
                parse_seed(v)
                    .map(|value| RandomSeed { value })
                    .map_err(E::custom)
            }
        }

        d.deserialize_str(SeedVisitor)
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default
/// `warn`). Used by the binaries; the library never installs one itself.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
