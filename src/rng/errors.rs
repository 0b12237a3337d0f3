use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by [`RandomSource`](super::RandomSource) draw operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RandomError {
    /// The requested range `[min, max)` is empty or inverted.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    #[diagnostic(
        code(randgen::rng::invalid_range),
        help("pass the upper bound first: get_between(max, min)")
    )]
    InvalidRange { max: i64, min: i64 },
}
