use getset::CopyGetters;
use nalgebra::RealField;
use num_traits::Zero;

/// The way an iterative process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stopping criterion was satisfied.
    Converged,
    /// The method could not improve the estimate any further and stopped
    /// before the stopping criterion was satisfied.
    Stalled,
    /// The maximum number of iterations elapsed.
    Exhausted,
}

/// Outcome of a method.
///
/// The default value has all numeric fields zero and corresponds to the
/// result of a call that was rejected at entry.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Solution<T: RealField + Copy> {
    /// The estimated root or minimizer.
    x: T,
    /// The function value at the estimate.
    fx: T,
    /// The final error estimate.
    error: T,
    /// Number of iterations performed.
    iterations: usize,
    /// The way the process ended.
    status: Status,
}

impl<T: RealField + Copy> Solution<T> {
    pub(crate) fn new(x: T, fx: T, error: T, iterations: usize, status: Status) -> Self {
        Self {
            x,
            fx,
            error,
            iterations,
            status,
        }
    }

    /// Returns `true` if the stopping criterion was satisfied.
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

impl<T: RealField + Copy> Default for Solution<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), 0, Status::Exhausted)
    }
}
