//! # randgen: seedable random draws
//!
//! A small random source that records its seed, so any stream it produces
//! can be replayed later.
//!
//! ## Core Concepts
//!
//! - **Seed**: a `u64` that fully determines the draw sequence
//! - **Draw**: one raw value in `[0, MAX_DRAW]`
//! - **Range reduction**: mapping a draw into `[min, max)` by modulus
//!
//! ## Quick Start
//!
//! ```
//! use randgen::{RandomSource, RandomError};
//!
//! let mut source = RandomSource::seeded(42);
//! let raw = source.get();
//! let die = source.get_between(7, 1)?;
//! let chance = source.get_percent();
//! let bulk = source.fill_len(5, 0, Some(10))?;
//!
//! assert!(raw <= randgen::MAX_DRAW);
//! assert!((1..7).contains(&die));
//! assert!((0.0..1.0).contains(&chance));
//! assert_eq!(bulk.len(), 5);
//!
//! // Replay from the recorded seed.
//! let mut replay = RandomSource::seeded(source.seed());
//! assert_eq!(replay.get(), raw);
//! # Ok::<(), RandomError>(())
//! ```
//!
//! ### Error Handling
//!
//! Inverted or empty ranges are rejected instead of producing a meaningless
//! modulus:
//!
//! ```
//! use randgen::{RandomSource, RandomError};
//!
//! let mut source = RandomSource::seeded(1);
//! assert_eq!(
//!     source.get_between(0, 100),
//!     Err(RandomError::InvalidRange { max: 0, min: 100 })
//! );
//! ```
//!
//! ## Module Guide
//!
//! - [`rng`] - The random source and its errors
//! - [`config`] - Seed configuration from code, files or the environment
//! - [`telemetry`] - Tracing subscriber setup

pub mod config;
pub mod rng;
pub mod telemetry;

pub use config::{ConfigError, SourceConfig};
pub use rng::{RandomError, RandomSource, MAX_DRAW};
