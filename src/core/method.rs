use nalgebra::RealField;

use super::{convergence::Convergence, objective::Objective};

/// Verdict of a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The stopping criterion is not satisfied yet.
    Continue,
    /// The stopping criterion is satisfied.
    Converged,
    /// The method cannot improve the estimate any further.
    Stalled,
}

/// The final estimate of a method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate<T> {
    /// The estimated root or minimizer.
    pub x: T,
    /// The function value at `x`.
    pub fx: T,
    /// The error estimate.
    pub error: T,
}

/// Interface of an iterative method.
///
/// A method keeps the state of the process and computes one iteration per
/// call to [`next`](Method::next). The loop itself, including counting the
/// iterations and enforcing the maximum, is left to the
/// [`Driver`](crate::driver::Driver).
///
/// ## Implementing a method
///
/// Here is a fixed-point iteration `x <- x - f(x)`, which converges for
/// functions with a derivative between 0 and 2 near the root.
///
/// ```rust
/// use onedim::{Convergence, Driver, Estimate, Method, Objective, Progress};
///
/// struct FixedPoint {
///     x: f64,
///     error: f64,
/// }
///
/// impl Method<f64> for FixedPoint {
///     const NAME: &'static str = "Fixed point";
///
///     fn next<F>(&mut self, f: &F, conv: &Convergence<f64>) -> Progress
///     where
///         F: Objective<f64> + ?Sized,
///     {
///         let old = self.x;
///         self.x -= f.eval(self.x);
///         self.error = conv.relative_error(self.x, old, self.error);
///
///         if conv.is_satisfied(self.error) {
///             Progress::Converged
///         } else {
///             Progress::Continue
///         }
///     }
///
///     fn finish<F>(&self, f: &F) -> Estimate<f64>
///     where
///         F: Objective<f64> + ?Sized,
///     {
///         Estimate {
///             x: self.x,
///             fx: f.eval(self.x),
///             error: self.error,
///         }
///     }
/// }
///
/// let f = |x: f64| 0.5 * x - 1.0;
/// let conv = Convergence::new(1e-6, 100).unwrap();
/// let method = FixedPoint { x: 0.0, error: conv.initial_error() };
///
/// let solution = Driver::new(&f, method, conv).run();
/// assert!(solution.is_converged());
/// assert!((solution.x() - 2.0).abs() < 1e-6);
/// ```
pub trait Method<T: RealField + Copy> {
    /// Name of the method.
    const NAME: &'static str;

    /// Computes the next iteration of the process.
    ///
    /// The implementations can assume that the same function `f` is passed
    /// to every call.
    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized;

    /// Returns the current estimate together with its function value and
    /// error.
    fn finish<F>(&self, f: &F) -> Estimate<T>
    where
        F: Objective<T> + ?Sized;
}
