//! Uniform sampling over arithmetic types.
//!
//! [`UniformGenerator`] owns one [`BitSource`] and adapts its raw words into
//! typed uniform values:
//!
//! - integers are drawn from the inclusive range `[min, max]`
//! - floats are drawn from the half-open range `[min, max)`
//! - [`generate_unit`](UniformGenerator::generate_unit) converts a single raw
//!   word directly into an `f64` on [0, 1)
//!
//! The integer/float split is made by the [`Arithmetic`] impl of the sampled
//! type, so it is resolved at compile time.
//!
//! ## Usage Example
//!
//! ```rust
//! use util_rng::UniformGenerator;
//!
//! let mut rng: UniformGenerator = UniformGenerator::from_seed_u64(12345);
//!
//! let die = rng.generate(1_u8, 6);
//! assert!((1..=6).contains(&die));
//!
//! let price = rng.generate(99.0_f64, 101.0);
//! assert!((99.0..101.0).contains(&price));
//!
//! let u = rng.generate_unit();
//! assert!((0.0..1.0).contains(&u));
//! ```

use std::fmt;

use rand::distributions::uniform::SampleUniform;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::bit_source::{BitSource, DefaultBitSource, RawBits};
use crate::error::RngError;
use crate::seed::SeedSource;

mod private {
    pub trait Sealed {}
}

/// Primitive integer and floating-point types accepted by uniform sampling.
///
/// Sealed: implemented for every primitive integer type and for `f32`/`f64`.
pub trait Arithmetic: SampleUniform + Copy + PartialOrd + fmt::Debug + private::Sealed {
    /// Returns `true` if `[min, max]` (integers) or `[min, max)` (floats)
    /// is a non-empty interval that can be sampled.
    fn is_valid_range(min: Self, max: Self) -> bool;

    /// Draws one value from the range. The range must be valid.
    fn sample_between<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;

    /// Builds a reusable sampler for the range. The range must be valid.
    fn uniform(min: Self, max: Self) -> Uniform<Self>;
}

macro_rules! impl_arithmetic_integer {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Arithmetic for $t {
                #[inline]
                fn is_valid_range(min: Self, max: Self) -> bool {
                    min <= max
                }

                #[inline]
                fn sample_between<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    rng.gen_range(min..=max)
                }

                #[inline]
                fn uniform(min: Self, max: Self) -> Uniform<Self> {
                    Uniform::new_inclusive(min, max)
                }
            }
        )+
    };
}

macro_rules! impl_arithmetic_float {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Arithmetic for $t {
                /// Requires `min < max` and a finite span.
                #[inline]
                fn is_valid_range(min: Self, max: Self) -> bool {
                    min < max && (max - min).is_finite()
                }

                #[inline]
                fn sample_between<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    rng.gen_range(min..max)
                }

                #[inline]
                fn uniform(min: Self, max: Self) -> Uniform<Self> {
                    Uniform::new(min, max)
                }
            }
        )+
    };
}

impl_arithmetic_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_arithmetic_float!(f32, f64);

/// Uniform random value generator over a pluggable bit source.
///
/// The generator holds nothing but its bit source. It is single-owner:
/// give each thread its own instance, seeded independently.
///
/// # Seeding
///
/// | Constructor | Stream |
/// |-------------|--------|
/// | [`new`](Self::new) / `Default` | clock-seeded, differs per run |
/// | [`from_seed_u32`](Self::from_seed_u32) | reproducible |
/// | [`from_seed_u64`](Self::from_seed_u64) | reproducible |
/// | [`with_seed`](Self::with_seed) | any [`SeedSource`] |
///
/// # Examples
///
/// ```rust
/// use util_rng::UniformGenerator;
///
/// let mut rng1: UniformGenerator = UniformGenerator::from_seed_u32(7);
/// let mut rng2: UniformGenerator = UniformGenerator::from_seed_u32(7);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_raw(), rng2.next_raw());
/// assert_eq!(rng1.generate(-5_i32, 5), rng2.generate(-5_i32, 5));
/// ```
#[derive(Debug, Clone)]
pub struct UniformGenerator<T = DefaultBitSource> {
    source: T,
}

impl<T: BitSource + SeedableRng> UniformGenerator<T> {
    /// Creates a generator seeded from the system clock.
    pub fn new() -> Self {
        Self::with_seed(SeedSource::Clock)
    }

    /// Creates a generator with an explicit 32-bit seed.
    pub fn from_seed_u32(seed: u32) -> Self {
        Self::with_seed(SeedSource::Bits32(seed))
    }

    /// Creates a generator with an explicit 64-bit seed.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::with_seed(SeedSource::Bits64(seed))
    }

    /// Creates a generator from any seed source.
    pub fn with_seed(seed: SeedSource) -> Self {
        let resolved = seed.resolve();
        tracing::debug!(seed = resolved, origin = %seed, "seeded uniform generator");
        Self {
            source: T::seed_from_u64(resolved),
        }
    }
}

impl<T: BitSource> UniformGenerator<T> {
    /// Returns the next raw word of the bit source, advancing it one step.
    #[inline]
    pub fn next_raw(&mut self) -> T::Output {
        self.source.next_raw()
    }

    /// Inclusive lower bound of [`next_raw`](Self::next_raw).
    #[inline]
    pub fn min() -> T::Output {
        T::min()
    }

    /// Inclusive upper bound of [`next_raw`](Self::next_raw).
    #[inline]
    pub fn max() -> T::Output {
        T::max()
    }

    /// Draws a uniform value between `min` and `max`.
    ///
    /// Integers are drawn from `[min, max]`, floats from `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty: `min > max` for integers, or
    /// `min >= max` (or a non-finite span) for floats. Use
    /// [`try_generate`](Self::try_generate) to get an error instead.
    #[inline]
    pub fn generate<U: Arithmetic>(&mut self, min: U, max: U) -> U {
        match self.try_generate(min, max) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Draws a uniform value between `min` and `max`, rejecting empty ranges.
    ///
    /// # Errors
    ///
    /// `RngError::InvalidRange` under the conditions listed on
    /// [`generate`](Self::generate).
    #[inline]
    pub fn try_generate<U: Arithmetic>(&mut self, min: U, max: U) -> Result<U, RngError> {
        if !U::is_valid_range(min, max) {
            return Err(RngError::invalid_range(min, max));
        }
        Ok(U::sample_between(&mut self.source, min, max))
    }

    /// Draws an `f64` uniformly from [0, 1) using exactly one raw word.
    ///
    /// The conversion is bit-level, so no distribution object is built.
    /// 64-bit sources fill the full 53-bit mantissa; 32-bit sources such as
    /// [`Xoshiro128StarStar`](crate::Xoshiro128StarStar) yield values on a
    /// 2^-32 grid instead.
    #[inline]
    pub fn generate_unit(&mut self) -> f64 {
        self.next_raw().to_unit_f64()
    }

    /// Fills the buffer with uniform values between `min` and `max`.
    ///
    /// The range is validated once and a single sampler is reused for every
    /// element. Empty buffers are left untouched.
    ///
    /// # Errors
    ///
    /// `RngError::InvalidRange` under the conditions listed on
    /// [`generate`](Self::generate); the buffer is not modified.
    pub fn fill<U: Arithmetic>(
        &mut self,
        buffer: &mut [U],
        min: U,
        max: U,
    ) -> Result<(), RngError> {
        if !U::is_valid_range(min, max) {
            return Err(RngError::invalid_range(min, max));
        }
        if buffer.is_empty() {
            return Ok(());
        }
        let uniform = U::uniform(min, max);
        for value in buffer.iter_mut() {
            *value = uniform.sample(&mut self.source);
        }
        Ok(())
    }
}

impl<T: BitSource + SeedableRng> Default for UniformGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BitSource> RngCore for UniformGenerator<T> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.source.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.source.try_fill_bytes(dest)
    }
}

impl<T: BitSource + SeedableRng> SeedableRng for UniformGenerator<T> {
    type Seed = T::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            source: T::from_seed(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self {
            source: T::seed_from_u64(state),
        }
    }
}

impl<T: BitSource> BitSource for UniformGenerator<T> {
    type Output = T::Output;

    #[inline]
    fn next_raw(&mut self) -> Self::Output {
        self.source.next_raw()
    }
}
