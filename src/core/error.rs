use thiserror::Error;

/// Error returned when the input of a method does not satisfy its
/// preconditions.
///
/// All preconditions are checked once, before the first iteration. Numerical
/// pathologies arising during the iterations (vanishing derivative, division
/// by a zero ordinate difference, divergence) are *not* reported as errors,
/// they propagate into the estimate as infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The tolerance is negative or NaN.
    #[error("tolerance must be non-negative")]
    InvalidTolerance,
    /// The bracket does not enclose a root or a minimum.
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),
    /// The number of samples requested from
    /// [`linspace`](crate::sampling::linspace) is zero.
    #[error("sample count must be greater than zero")]
    InvalidSampleCount,
}

/// Reason why a bracket was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BracketError {
    /// The function values at the endpoints have the same sign.
    #[error("no sign change in interval")]
    NoSignChange,
    /// The middle point of a triple does not lie between the endpoints.
    #[error("the condition lower <= midpoint <= upper is not met")]
    UnorderedTriple,
    /// The function value at the middle point is above one of the endpoints.
    #[error("the condition f(lower) >= f(midpoint) <= f(upper) is not met")]
    NotAValley,
}
