//! Inverse quadratic interpolation.
//!
//! [Inverse quadratic
//! interpolation](https://en.wikipedia.org/wiki/Inverse_quadratic_interpolation)
//! fits a quadratic `x = g(y)` through three points of the function and takes
//! `g(0)` as the next estimate. Here the three points are the current
//! estimate and its perturbations `x - p * x` and `x + p * x`, all evaluated
//! anew in every iteration.
//!
//! The interpolation formula divides by differences of the function values.
//! These are not guarded, so equal values at two of the points make the
//! estimate blow up or become NaN.

use getset::{CopyGetters, Setters};
use nalgebra::{convert, RealField};

use crate::{
    core::{Convergence, Error, Estimate, Method, Objective, Progress, Solution},
    driver::Driver,
};

/// Options for [`InverseQuadratic`] method.
#[derive(Debug, Clone, Copy, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct InverseQuadraticOptions<T: RealField + Copy> {
    /// Fraction of the estimate used for placing the outer interpolation
    /// points. Default: `1e-6`.
    perturbation: T,
}

impl<T: RealField + Copy> Default for InverseQuadraticOptions<T> {
    fn default() -> Self {
        Self {
            perturbation: convert(1e-6),
        }
    }
}

/// Inverse quadratic interpolation. See [module](self) documentation for more
/// details.
#[derive(Debug, Clone)]
pub struct InverseQuadratic<T: RealField + Copy> {
    options: InverseQuadraticOptions<T>,
    root: T,
    error: T,
}

impl<T: RealField + Copy> InverseQuadratic<T> {
    /// Initializes the method from the initial guess with default options.
    pub fn new(initial: T, conv: &Convergence<T>) -> Self {
        Self::with_options(initial, conv, InverseQuadraticOptions::default())
    }

    /// Initializes the method from the initial guess with given options.
    pub fn with_options(
        initial: T,
        conv: &Convergence<T>,
        options: InverseQuadraticOptions<T>,
    ) -> Self {
        Self {
            options,
            root: initial,
            error: conv.initial_error(),
        }
    }
}

/// Evaluates the inverse quadratic through `(y0, x0)`, `(y1, x1)` and
/// `(y2, x2)` at zero, using the Lagrange form.
///
/// Each weight is computed before it multiplies its abscissa and the term of
/// `x2` is summed first.
pub(crate) fn interpolate_at_zero<T: RealField + Copy>(
    (x0, y0): (T, T),
    (x1, y1): (T, T),
    (x2, y2): (T, T),
) -> T {
    ((y0 * y1) / ((y2 - y0) * (y2 - y1))) * x2
        + ((y2 * y1) / ((y0 - y2) * (y0 - y1))) * x0
        + ((y2 * y0) / ((y1 - y2) * (y1 - y0))) * x1
}

impl<T: RealField + Copy> Method<T> for InverseQuadratic<T> {
    const NAME: &'static str = "Inverse quadratic interpolation";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let InverseQuadraticOptions { perturbation } = self.options;

        let old = self.root;
        let step = perturbation * self.root;

        let left = self.root - step;
        let right = self.root + step;

        self.root = interpolate_at_zero(
            (left, f.eval(left)),
            (self.root, f.eval(self.root)),
            (right, f.eval(right)),
        );
        self.error = conv.relative_error(self.root, old, self.error);

        if conv.is_satisfied(self.error) {
            Progress::Converged
        } else {
            Progress::Continue
        }
    }

    fn finish<F>(&self, f: &F) -> Estimate<T>
    where
        F: Objective<T> + ?Sized,
    {
        Estimate {
            x: self.root,
            fx: f.eval(self.root),
            error: self.error,
        }
    }
}

/// Finds a root of `f` near `initial` using the [inverse quadratic
/// interpolation](self) with given perturbation fraction.
///
/// The tolerance is the relative error in percent. Fails only if the
/// tolerance is negative.
///
/// ```rust
/// let f = |x: f64| (-x).exp() - x;
/// let solution = onedim::inverse_quadratic_interpolation(&f, 1e-6, 1.0, 1e-8, 50).unwrap();
///
/// assert!((solution.x() - 0.5671432904).abs() < 1e-9);
/// ```
pub fn inverse_quadratic_interpolation<T, F>(
    f: &F,
    perturbation: T,
    initial: T,
    tolerance: T,
    max_iterations: usize,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
{
    let conv = Convergence::new(tolerance, max_iterations)?;

    let mut options = InverseQuadraticOptions::default();
    options.set_perturbation(perturbation);

    let method = InverseQuadratic::with_options(initial, &conv, options);
    Ok(Driver::new(f, method, conv).run())
}
