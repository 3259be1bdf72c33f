//! Seed configuration for generator construction.
//!
//! [`SeedSource`] names where a generator's initial state comes from. The
//! 32-bit and 64-bit forms are distinct variants so that seed width is always
//! explicit at the call site; the clock variant gives a fresh,
//! non-reproducible stream per run.
//!
//! Seeds can also be read from configuration strings and environment
//! variables:
//!
//! ```rust
//! use util_rng::SeedSource;
//!
//! let seed: SeedSource = "u64:42".parse().unwrap();
//! assert_eq!(seed, SeedSource::Bits64(42));
//! assert_eq!(seed.to_string(), "u64:42");
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RngError;

/// Origin of a generator seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedSource {
    /// Current wall-clock time in nanoseconds; differs between runs.
    #[default]
    Clock,
    /// Explicit 32-bit seed; reproducible.
    Bits32(u32),
    /// Explicit 64-bit seed; reproducible.
    Bits64(u64),
}

impl SeedSource {
    /// Resolves the seed to the 64-bit value handed to the bit source.
    ///
    /// `Bits32` is widened without loss, so `Bits32(n)` and `Bits64(n)`
    /// select the same stream.
    pub fn resolve(self) -> u64 {
        match self {
            SeedSource::Clock => clock_seed(),
            SeedSource::Bits32(seed) => u64::from(seed),
            SeedSource::Bits64(seed) => seed,
        }
    }

    /// Returns `true` for the explicit, reproducible variants.
    pub fn is_reproducible(&self) -> bool {
        !matches!(self, SeedSource::Clock)
    }

    /// Reads a seed specification from the environment variable `key`.
    ///
    /// Returns `Ok(None)` when the variable is unset.
    ///
    /// # Errors
    ///
    /// `RngError::InvalidSeed` if the variable is set but is not valid
    /// Unicode or does not parse as a [`SeedSource`].
    pub fn from_env(key: &str) -> Result<Option<Self>, RngError> {
        match std::env::var(key) {
            Ok(value) => value.parse().map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(RngError::InvalidSeed(format!("{} is not valid unicode", key)))
            }
        }
    }
}

impl FromStr for SeedSource {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("clock") {
            return Ok(SeedSource::Clock);
        }

        let invalid = || RngError::InvalidSeed(s.to_string());
        let (width, value) = trimmed.split_once(':').ok_or_else(invalid)?;
        let value = value.trim();
        match width.trim().to_ascii_lowercase().as_str() {
            "u32" => value
                .parse::<u32>()
                .map(SeedSource::Bits32)
                .map_err(|_| invalid()),
            "u64" => value
                .parse::<u64>()
                .map(SeedSource::Bits64)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Clock => write!(f, "clock"),
            SeedSource::Bits32(seed) => write!(f, "u32:{}", seed),
            SeedSource::Bits64(seed) => write!(f, "u64:{}", seed),
        }
    }
}

/// Reads the system clock and converts it to a seed.
fn clock_seed() -> u64 {
    let nanos = seed_from_clock_reading(SystemTime::now());
    tracing::trace!(seed = nanos, "drew clock seed");
    nanos
}

/// Nanoseconds between `now` and the Unix epoch, truncated to the low 64 bits.
///
/// A clock set before the epoch still yields a time-varying seed: the
/// distance back to the epoch is used, and a warning is emitted.
fn seed_from_clock_reading(now: SystemTime) -> u64 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(err) => {
            let before = err.duration();
            tracing::warn!(
                before_epoch_ns = before.as_nanos() as u64,
                "system clock reads before the Unix epoch; seeding from the offset"
            );
            before.as_nanos() as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_resolve_explicit_seeds() {
        assert_eq!(SeedSource::Bits32(7).resolve(), 7);
        assert_eq!(SeedSource::Bits32(u32::MAX).resolve(), u64::from(u32::MAX));
        assert_eq!(SeedSource::Bits64(u64::MAX).resolve(), u64::MAX);
    }

    #[test]
    fn test_default_is_clock() {
        assert_eq!(SeedSource::default(), SeedSource::Clock);
        assert!(!SeedSource::Clock.is_reproducible());
        assert!(SeedSource::Bits32(1).is_reproducible());
        assert!(SeedSource::Bits64(1).is_reproducible());
    }

    #[test]
    fn test_clock_seed_is_nonzero() {
        assert_ne!(SeedSource::Clock.resolve(), 0);
    }

    #[test]
    fn test_clock_reading_after_epoch() {
        let now = UNIX_EPOCH + Duration::from_nanos(1_234_567);
        assert_eq!(seed_from_clock_reading(now), 1_234_567);
    }

    #[test]
    fn test_clock_reading_before_epoch_still_varies() {
        let early = UNIX_EPOCH - Duration::from_secs(5);
        let earlier = UNIX_EPOCH - Duration::from_secs(6);
        assert_eq!(seed_from_clock_reading(early), 5_000_000_000);
        assert_ne!(seed_from_clock_reading(early), seed_from_clock_reading(earlier));
        assert_ne!(seed_from_clock_reading(earlier), 0);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("clock".parse::<SeedSource>(), Ok(SeedSource::Clock));
        assert_eq!(" CLOCK ".parse::<SeedSource>(), Ok(SeedSource::Clock));
        assert_eq!("u32:123".parse::<SeedSource>(), Ok(SeedSource::Bits32(123)));
        assert_eq!(
            "U64: 18446744073709551615".parse::<SeedSource>(),
            Ok(SeedSource::Bits64(u64::MAX))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "42", "u16:1", "u32:4294967296", "u64:-1", "u64:abc"] {
            assert_eq!(
                input.parse::<SeedSource>(),
                Err(RngError::InvalidSeed(input.to_string())),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_display_parses_back() {
        for seed in [
            SeedSource::Clock,
            SeedSource::Bits32(0),
            SeedSource::Bits64(987_654_321_012),
        ] {
            assert_eq!(seed.to_string().parse::<SeedSource>(), Ok(seed));
        }
    }

    #[test]
    fn test_from_env() {
        let key = "UTIL_RNG_TEST_SEED_FROM_ENV";
        std::env::remove_var(key);
        assert_eq!(SeedSource::from_env(key), Ok(None));

        std::env::set_var(key, "u32:99");
        assert_eq!(SeedSource::from_env(key), Ok(Some(SeedSource::Bits32(99))));

        std::env::set_var(key, "bogus");
        assert!(matches!(
            SeedSource::from_env(key),
            Err(RngError::InvalidSeed(_))
        ));
        std::env::remove_var(key);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&SeedSource::Bits32(5)).unwrap();
        assert_eq!(json, r#"{"bits32":5}"#);
        let back: SeedSource = serde_json::from_str(r#""clock""#).unwrap();
        assert_eq!(back, SeedSource::Clock);
    }
}
