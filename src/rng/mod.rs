//! Seedable random source.
//!
//! [`RandomSource`] owns its generator state, so two sources never share a
//! stream. A source built from a given seed always yields the same draws for
//! a fixed `rand` version.

mod errors;
mod source;


pub use errors::RandomError;
pub use source::{RandomSource, MAX_DRAW};
