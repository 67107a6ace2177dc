use getset::{CopyGetters, Setters};
use nalgebra::{convert, ComplexField, RealField};
use num_traits::Zero;

use super::error::Error;

/// Behavior of the relative error when the new estimate is exactly zero.
///
/// The relative error `|(x_k - x_{k-1}) / x_k| * 100` is undefined for
/// `x_k = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPolicy {
    /// The error is not updated and keeps the value from the previous
    /// iteration.
    #[default]
    KeepPrevious,
    /// The division is performed anyway, yielding infinity (or NaN when the
    /// estimate did not move).
    Propagate,
}

/// Stopping criteria shared by all methods.
///
/// The iteration stops when the relative error of the estimate (in percent)
/// drops to or below the tolerance, or when the maximum number of iterations
/// elapsed, whichever comes first.
#[derive(Debug, Clone, Copy, CopyGetters, Setters)]
pub struct Convergence<T: RealField + Copy> {
    /// Threshold for the relative error in percent.
    #[getset(get_copy = "pub")]
    tolerance: T,
    /// Maximum number of iterations.
    #[getset(get_copy = "pub", set = "pub")]
    max_iterations: usize,
    /// Behavior for zero estimates. Default: keep previous (see
    /// [`ZeroPolicy`]).
    #[getset(get_copy = "pub", set = "pub")]
    zero_policy: ZeroPolicy,
}

impl<T: RealField + Copy> Convergence<T> {
    /// Initial value of the relative error, so the criterion never fires
    /// before there is any estimate.
    pub const INITIAL_ERROR: f64 = 100.0;

    /// Creates the criteria with given tolerance (in percent) and maximum
    /// number of iterations.
    ///
    /// Fails with [`Error::InvalidTolerance`] if the tolerance is negative or
    /// NaN.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, Error> {
        // Negated comparison to reject NaN as well.
        if !(tolerance >= T::zero()) {
            return Err(Error::InvalidTolerance);
        }

        Ok(Self {
            tolerance,
            max_iterations,
            zero_policy: ZeroPolicy::default(),
        })
    }

    /// Returns the relative error to start the iteration with.
    pub fn initial_error(&self) -> T {
        convert(Self::INITIAL_ERROR)
    }

    /// Computes `|delta / estimate| * 100`.
    ///
    /// If `estimate` is zero, the outcome depends on the
    /// [zero policy](ZeroPolicy): either `previous` is returned unchanged or
    /// the division is carried out.
    pub fn percent_of(&self, delta: T, estimate: T, previous: T) -> T {
        if estimate.is_zero() && self.zero_policy == ZeroPolicy::KeepPrevious {
            previous
        } else {
            (delta / estimate).abs() * convert(100.0)
        }
    }

    /// Computes the relative error between two successive estimates in
    /// percent. See [`percent_of`](Convergence::percent_of) for the handling
    /// of zero estimates.
    pub fn relative_error(&self, current: T, previous: T, error: T) -> T {
        self.percent_of(current - previous, current, error)
    }

    /// Checks whether the error satisfies the tolerance.
    pub fn is_satisfied(&self, error: T) -> bool {
        error <= self.tolerance
    }
}
