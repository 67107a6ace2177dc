//! Modified secant method.
//!
//! The [secant method](https://en.wikipedia.org/wiki/Secant_method) replaces
//! the derivative in Newton's method by a finite difference. This variant
//! perturbs the current estimate by a small fraction `p` of itself instead of
//! keeping the previous estimate:
//!
//! ```text
//! x <- x - p * x * f(x) / (f(x + p * x) - f(x))
//! ```
//!
//! Like Newton's method, it keeps no bracket and can diverge. Note that the
//! perturbation vanishes for `x = 0`, which makes the step undefined.
//!
//! # References
//!
//! \[1\] [Numerical Methods for
//! Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9780073397924.html)

use getset::{CopyGetters, Setters};
use nalgebra::{convert, RealField};

use crate::{
    core::{Convergence, Error, Estimate, Method, Objective, Progress, Solution},
    driver::Driver,
};

/// Options for [`Secant`] method.
#[derive(Debug, Clone, Copy, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct SecantOptions<T: RealField + Copy> {
    /// Fraction of the estimate used for the finite difference. Default:
    /// `1e-6`.
    perturbation: T,
}

impl<T: RealField + Copy> Default for SecantOptions<T> {
    fn default() -> Self {
        Self {
            perturbation: convert(1e-6),
        }
    }
}

/// Modified secant method. See [module](self) documentation for more
/// details.
#[derive(Debug, Clone)]
pub struct Secant<T: RealField + Copy> {
    options: SecantOptions<T>,
    root: T,
    error: T,
}

impl<T: RealField + Copy> Secant<T> {
    /// Initializes the method from the initial guess with default options.
    pub fn new(initial: T, conv: &Convergence<T>) -> Self {
        Self::with_options(initial, conv, SecantOptions::default())
    }

    /// Initializes the method from the initial guess with given options.
    pub fn with_options(initial: T, conv: &Convergence<T>, options: SecantOptions<T>) -> Self {
        Self {
            options,
            root: initial,
            error: conv.initial_error(),
        }
    }
}

impl<T: RealField + Copy> Method<T> for Secant<T> {
    const NAME: &'static str = "Secant";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let SecantOptions { perturbation } = self.options;

        let old = self.root;
        let step = perturbation * self.root;
        let fx = f.eval(self.root);

        self.root -= step * fx / (f.eval(self.root + step) - fx);
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

/// Finds a root of `f` near `initial` using the [modified secant](self)
/// method with given perturbation fraction.
///
/// The tolerance is the relative error in percent. Fails only if the
/// tolerance is negative.
///
/// ```rust
/// let f = |x: f64| x.powi(3) - x - 2.0;
/// let solution = onedim::secant(&f, 1e-6, 2.0, 1e-8, 50).unwrap();
///
/// assert!(solution.fx().abs() < 1e-10);
/// ```
pub fn secant<T, F>(
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

    let mut options = SecantOptions::default();
    options.set_perturbation(perturbation);

    let method = Secant::with_options(initial, &conv, options);
    Ok(Driver::new(f, method, conv).run())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    use crate::{core::Status, testing::*};

    #[test]
    fn linear() {
        let f = Linear::default();
        let tolerance = 1e-4;

        let solution = secant(&f, 1e-6, -10.0, tolerance, 50).unwrap();

        assert_abs_diff_eq!(solution.x(), 1.5, epsilon = tolerance);
        assert_abs_diff_eq!(solution.fx(), 0.0, epsilon = tolerance);
        assert!(solution.error() <= tolerance);
        assert!(solution.iterations() <= 2);
    }

    #[test]
    fn test_functions() {
        for f in root_problems() {
            let solution = secant(f.as_ref(), 1e-6, f.initial(), 1e-8, 50).unwrap();

            assert!(solution.is_converged());
            assert!(f.is_root(solution.x(), 1e-9));
        }
    }

    #[test]
    fn default_perturbation() {
        let f = Cubic;
        let conv = Convergence::new(1e-8, 50).unwrap();

        let explicit = secant(&f, 1e-6, 2.0, 1e-8, 50).unwrap();
        let default = Driver::new(&f, Secant::new(2.0, &conv), conv).run();

        assert_eq!(explicit, default);
    }

    #[test]
    fn zero_initial_guess_is_degenerate() {
        let f = Linear::default();

        let solution = secant(&f, 1e-6, 0.0, 1e-8, 10).unwrap();

        assert_eq!(solution.status(), Status::Exhausted);
        assert!(solution.x().is_nan());
    }

    #[test]
    fn idempotent() {
        let f = Exponential;

        let first = secant(&f, 1e-6, 1.0, 1e-8, 50).unwrap();
        let second = secant(&f, 1e-6, 1.0, 1e-8, 50).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn negative_tolerance() {
        let f = Linear::default();
        assert_eq!(
            secant(&f, 1e-6, -10.0, -1e-8, 50),
            Err(Error::InvalidTolerance)
        );
    }
}
