//! # util_rng: Uniform and Weighted Random Generators
//!
//! ## Role
//!
//! util_rng adapts a fast, seedable bit source into two small generators:
//! - [`UniformGenerator`]: typed uniform values over integer and float ranges,
//!   plus a bit-level [0, 1) double
//! - [`WeightedIndexGenerator`]: indices drawn from a fixed weighted
//!   categorical distribution
//!
//! Both are generic over the [`BitSource`] they own, defaulting to
//! xoshiro256** ([`DefaultBitSource`]).
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: explicit 32-bit and 64-bit seeds give deterministic
//!   streams; the clock seed gives a fresh stream per run
//! - **Static dispatch**: bit sources and numeric types are generic
//!   parameters, never trait objects
//! - **Fail fast**: empty ranges and invalid weight sequences are reported as
//!   [`RngError`] at the call that receives them
//!
//! Generators are not cryptographically secure and not synchronised. Give
//! each thread its own instance.
//!
//! ## Usage Example
//!
//! ```rust
//! use util_rng::{SeedSource, UniformGenerator, WeightedIndexGenerator};
//!
//! let mut rng: UniformGenerator = UniformGenerator::with_seed(SeedSource::Bits64(42));
//! let roll = rng.generate(1_u32, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let mut picker: WeightedIndexGenerator<u32> =
//!     WeightedIndexGenerator::from_seed_u64(42, &[1, 0, 3]).unwrap();
//! assert_ne!(picker.generate(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`SeedSource`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bit_source;
pub mod error;
pub mod seed;
pub mod uniform;
pub mod weighted;

// Public re-exports
pub use bit_source::{
    BitSource, DefaultBitSource, RawBits, SplitMix64, Xoshiro128PlusPlus, Xoshiro128StarStar,
    Xoshiro256PlusPlus, Xoshiro256StarStar,
};
pub use error::RngError;
pub use seed::SeedSource;
pub use uniform::{Arithmetic, UniformGenerator};
pub use weighted::{Weight, WeightedIndexGenerator};
