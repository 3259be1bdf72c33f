//! Weighted discrete-index sampling.
//!
//! [`WeightedIndexGenerator`] draws an index `i` in `[0, weights.len())`
//! with probability `weights[i] / sum(weights)`. The cumulative weight table
//! is built once at construction; each draw takes one uniform sample from
//! the owned bit source and locates it by binary search.
//!
//! Weights are validated when the generator is built, never on first use.
//! Zero weights are legal and make their index unreachable.
//!
//! ```rust
//! use util_rng::WeightedIndexGenerator;
//!
//! let mut picker: WeightedIndexGenerator<u32> =
//!     WeightedIndexGenerator::from_seed_u64(42, &[1, 0, 3]).unwrap();
//! let index = picker.generate();
//! assert!(index == 0 || index == 2);
//! ```

use std::fmt;
use std::ops::AddAssign;

use rand::distributions::uniform::SampleUniform;
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, WeightedError, WeightedIndex};

use crate::bit_source::{BitSource, DefaultBitSource};
use crate::error::RngError;
use crate::seed::SeedSource;

mod private {
    pub trait Sealed {}
}

/// Primitive numeric types usable as weights.
///
/// Sealed: implemented for every primitive integer type and for `f32`/`f64`.
pub trait Weight:
    SampleUniform
    + PartialOrd
    + for<'a> AddAssign<&'a Self>
    + Copy
    + Default
    + fmt::Debug
    + private::Sealed
{
    /// Returns `true` if the weight is finite and non-negative.
    fn is_admissible(self) -> bool;

    /// Adds two weights, returning `None` if the sum is not representable.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_weight_integer {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Weight for $t {
                #[inline]
                fn is_admissible(self) -> bool {
                    self >= <$t>::default()
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )+
    };
}

macro_rules! impl_weight_float {
    ($($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Weight for $t {
                #[inline]
                fn is_admissible(self) -> bool {
                    self.is_finite() && self >= 0.0
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )+
    };
}

impl_weight_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_weight_float!(f32, f64);

/// Checks that `weights` describes a usable categorical distribution.
fn validate_weights<U: Weight>(weights: &[U]) -> Result<(), RngError> {
    if weights.is_empty() {
        return Err(RngError::EmptyWeights);
    }

    let zero = U::default();
    let mut total = zero;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_admissible() {
            return Err(RngError::InvalidWeight { index });
        }
        total = total.checked_sum(weight).ok_or(RngError::WeightOverflow)?;
    }

    if total == zero {
        return Err(RngError::ZeroTotalWeight);
    }
    Ok(())
}

/// Random index generator over a fixed weighted distribution.
///
/// Owns a bit source and an immutable cumulative weight table. To change the
/// weights, build a new generator.
///
/// # Examples
///
/// ```rust
/// use util_rng::{RngError, WeightedIndexGenerator};
///
/// let mut picker: WeightedIndexGenerator<f64> =
///     WeightedIndexGenerator::from_seed_u32(7, &[0.2, 0.8]).unwrap();
/// assert_eq!(picker.index_count(), 2);
/// assert!(picker.generate() < 2);
///
/// // Weights are validated up front
/// let empty: Result<WeightedIndexGenerator<f64>, _> = WeightedIndexGenerator::new(&[]);
/// assert_eq!(empty.unwrap_err(), RngError::EmptyWeights);
/// ```
pub struct WeightedIndexGenerator<U: Weight, T = DefaultBitSource> {
    source: T,
    distribution: WeightedIndex<U>,
    index_count: usize,
}

impl<U: Weight, T: BitSource + SeedableRng> WeightedIndexGenerator<U, T> {
    /// Creates a generator seeded from the system clock.
    ///
    /// # Errors
    ///
    /// See [`with_seed`](Self::with_seed).
    pub fn new(weights: &[U]) -> Result<Self, RngError> {
        Self::with_seed(SeedSource::Clock, weights)
    }

    /// Creates a generator with an explicit 32-bit seed.
    ///
    /// # Errors
    ///
    /// See [`with_seed`](Self::with_seed).
    pub fn from_seed_u32(seed: u32, weights: &[U]) -> Result<Self, RngError> {
        Self::with_seed(SeedSource::Bits32(seed), weights)
    }

    /// Creates a generator with an explicit 64-bit seed.
    ///
    /// # Errors
    ///
    /// See [`with_seed`](Self::with_seed).
    pub fn from_seed_u64(seed: u64, weights: &[U]) -> Result<Self, RngError> {
        Self::with_seed(SeedSource::Bits64(seed), weights)
    }

    /// Creates a generator from any seed source and a weight sequence.
    ///
    /// # Errors
    ///
    /// - `RngError::EmptyWeights` if `weights` is empty
    /// - `RngError::InvalidWeight` for the first negative, NaN or infinite weight
    /// - `RngError::WeightOverflow` if the weights cannot be summed
    /// - `RngError::ZeroTotalWeight` if every weight is zero
    pub fn with_seed(seed: SeedSource, weights: &[U]) -> Result<Self, RngError> {
        validate_weights(weights)?;

        let distribution = WeightedIndex::new(weights.iter()).map_err(|err| match err {
            WeightedError::NoItem => RngError::EmptyWeights,
            WeightedError::AllWeightsZero => RngError::ZeroTotalWeight,
            WeightedError::InvalidWeight => RngError::InvalidWeight {
                index: weights
                    .iter()
                    .position(|weight| !weight.is_admissible())
                    .unwrap_or_default(),
            },
            WeightedError::TooMany => RngError::WeightOverflow,
        })?;

        let resolved = seed.resolve();
        tracing::debug!(
            seed = resolved,
            origin = %seed,
            indices = weights.len(),
            "seeded weighted index generator"
        );

        Ok(Self {
            source: T::seed_from_u64(resolved),
            distribution,
            index_count: weights.len(),
        })
    }
}

impl<U: Weight, T: BitSource> WeightedIndexGenerator<U, T> {
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

    /// Draws one index according to the weights.
    #[inline]
    pub fn generate(&mut self) -> usize {
        self.distribution.sample(&mut self.source)
    }

    /// Number of indices in the distribution's domain.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.index_count
    }
}

impl<U: Weight, T: BitSource> RngCore for WeightedIndexGenerator<U, T> {
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

impl<U: Weight, T: BitSource> BitSource for WeightedIndexGenerator<U, T> {
    type Output = T::Output;

    #[inline]
    fn next_raw(&mut self) -> Self::Output {
        self.source.next_raw()
    }
}

impl<U: Weight, T> fmt::Debug for WeightedIndexGenerator<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedIndexGenerator")
            .field("index_count", &self.index_count)
            .finish_non_exhaustive()
    }
}
