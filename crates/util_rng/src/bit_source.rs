//! Uniform random bit source contract.
//!
//! A [`BitSource`] is any generator that emits fixed-width unsigned
//! integers covering a declared `[min(), max()]` range. The uniform and
//! weighted generators are generic over it, so the core algorithm can be
//! swapped without touching caller code.
//!
//! ## Provided Sources
//!
//! | Source | Output | Notes |
//! |--------|--------|-------|
//! | [`Xoshiro256StarStar`] | `u64` | Default ([`DefaultBitSource`]) |
//! | [`Xoshiro256PlusPlus`] | `u64` | Same state size, `++` scrambler |
//! | [`Xoshiro128StarStar`] | `u32` | Half the state, 32-bit output |
//! | [`Xoshiro128PlusPlus`] | `u32` | Half the state, 32-bit output |
//! | [`SplitMix64`] | `u64` | Seeding generator of the xoshiro family |
//! | [`StdRng`] | `u64` | `rand`'s standard generator |
//!
//! All xoshiro sources expand a 64-bit seed through SplitMix64, so a given
//! seed yields the same stream as the reference xoshiro implementations.

use std::fmt;

use rand::rngs::StdRng;
use rand::RngCore;
pub use rand_xoshiro::{
    SplitMix64, Xoshiro128PlusPlus, Xoshiro128StarStar, Xoshiro256PlusPlus, Xoshiro256StarStar,
};

/// The bit source used when none is named.
pub type DefaultBitSource = Xoshiro256StarStar;

/// 2^-53: spacing of the 53-bit mantissa grid on [0, 1).
const F64_UNIT_53: f64 = 1.0 / (1_u64 << 53) as f64;

/// 2^-32: spacing of a 32-bit grid on [0, 1).
const F64_UNIT_32: f64 = 1.0 / (1_u64 << 32) as f64;

mod private {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Native output word of a bit source.
///
/// Sealed: implemented for `u32` and `u64` only.
pub trait RawBits:
    Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static + private::Sealed
{
    /// Smallest representable word.
    const MIN: Self;
    /// Largest representable word.
    const MAX: Self;

    /// Maps one raw word onto [0, 1) by bit-level conversion.
    ///
    /// The result never equals 1.0.
    fn to_unit_f64(self) -> f64;
}

impl RawBits for u64 {
    const MIN: Self = u64::MIN;
    const MAX: Self = u64::MAX;

    /// Keeps the upper 53 bits, which fill the `f64` mantissa exactly.
    #[inline]
    fn to_unit_f64(self) -> f64 {
        (self >> 11) as f64 * F64_UNIT_53
    }
}

impl RawBits for u32 {
    const MIN: Self = u32::MIN;
    const MAX: Self = u32::MAX;

    /// One word covers 32 bits only, so results lie on a 2^-32 grid.
    #[inline]
    fn to_unit_f64(self) -> f64 {
        f64::from(self) * F64_UNIT_32
    }
}

/// A generator of fixed-width unsigned integers.
///
/// Implementors are also [`RngCore`] so that `rand` and `rand_distr`
/// sampling algorithms can draw from them directly. Seeding is not part of
/// the contract: generators that own a source and further state, such as
/// [`WeightedIndexGenerator`](crate::WeightedIndexGenerator), are bit sources
/// too. Constructors that seed a source additionally require
/// [`SeedableRng`](rand::SeedableRng).
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use util_rng::{BitSource, Xoshiro256StarStar};
///
/// let mut source = Xoshiro256StarStar::seed_from_u64(7);
/// let raw = source.next_raw();
/// assert!(raw >= Xoshiro256StarStar::min() && raw <= Xoshiro256StarStar::max());
/// ```
pub trait BitSource: RngCore {
    /// Width of one raw draw.
    type Output: RawBits;

    /// Advances the state by exactly one step and returns the raw word.
    fn next_raw(&mut self) -> Self::Output;

    /// Inclusive lower bound of [`next_raw`](Self::next_raw).
    #[inline]
    fn min() -> Self::Output {
        <Self::Output as RawBits>::MIN
    }

    /// Inclusive upper bound of [`next_raw`](Self::next_raw).
    #[inline]
    fn max() -> Self::Output {
        <Self::Output as RawBits>::MAX
    }
}

macro_rules! impl_bit_source {
    ($($source:ty => $output:ty, $next:ident;)+) => {
        $(
            impl BitSource for $source {
                type Output = $output;

                #[inline]
                fn next_raw(&mut self) -> $output {
                    RngCore::$next(self)
                }
            }
        )+
    };
}

impl_bit_source! {
    Xoshiro256StarStar => u64, next_u64;
    Xoshiro256PlusPlus => u64, next_u64;
    Xoshiro128StarStar => u32, next_u32;
    Xoshiro128PlusPlus => u32, next_u32;
    SplitMix64 => u64, next_u64;
    StdRng => u64, next_u64;
}
