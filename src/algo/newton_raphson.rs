//! Newton-Raphson method.
//!
//! [Newton's method](https://en.wikipedia.org/wiki/Newton%27s_method) follows
//! the tangent of the function at the current estimate down to zero:
//!
//! ```text
//! x <- x - f(x) / f'(x)
//! ```
//!
//! It converges quadratically near a simple root, but no bracket is kept and
//! nothing protects it from divergence or from a vanishing derivative. In
//! such cases the iteration runs out of the budget and the solution has
//! [`Exhausted`](crate::Status::Exhausted) status, possibly with non-finite
//! estimate.

use nalgebra::RealField;

use crate::{
    core::{Convergence, Error, Estimate, Method, Objective, Progress, Solution},
    driver::Driver,
};

/// Newton-Raphson method. See [module](self) documentation for more details.
pub struct NewtonRaphson<'a, T: RealField + Copy, D: ?Sized> {
    df: &'a D,
    root: T,
    error: T,
}

impl<'a, T: RealField + Copy, D: Objective<T> + ?Sized> NewtonRaphson<'a, T, D> {
    /// Initializes the method with the derivative of the function and an
    /// initial guess.
    ///
    /// The derivative is not verified in any way.
    pub fn new(df: &'a D, initial: T, conv: &Convergence<T>) -> Self {
        Self {
            df,
            root: initial,
            error: conv.initial_error(),
        }
    }
}

impl<'a, T: RealField + Copy, D: Objective<T> + ?Sized> Method<T> for NewtonRaphson<'a, T, D> {
    const NAME: &'static str = "Newton-Raphson";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let old = self.root;
        self.root -= f.eval(self.root) / self.df.eval(self.root);
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

/// Finds a root of `f` near `initial` using the [Newton-Raphson](self)
/// method with the derivative `df`.
///
/// The tolerance is the relative error in percent. Fails only if the
/// tolerance is negative.
///
/// ```rust
/// let f = |x: f64| 2.0 * x - 3.0;
/// let df = |_: f64| 2.0;
/// let solution = onedim::newton_raphson(&f, &df, -10.0, 1e-4, 50).unwrap();
///
/// assert_eq!(solution.x(), 1.5);
/// assert_eq!(solution.iterations(), 1);
/// ```
pub fn newton_raphson<T, F, D>(
    f: &F,
    df: &D,
    initial: T,
    tolerance: T,
    max_iterations: usize,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
    D: Objective<T> + ?Sized,
{
    let conv = Convergence::new(tolerance, max_iterations)?;
    let method = NewtonRaphson::new(df, initial, &conv);
    Ok(Driver::new(f, method, conv).run())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    use crate::{
        core::{Status, ZeroPolicy},
        testing::*,
    };

    #[test]
    fn linear_in_one_step() {
        let f = Linear::default();
        let df = |x| f.df(x);

        let solution = newton_raphson(&f, &df, -10.0, 1e-4, 50).unwrap();

        assert_eq!(solution.x(), 1.5);
        assert_eq!(solution.fx(), 0.0);
        assert_eq!(solution.error(), 0.0);
        assert_eq!(solution.iterations(), 1);
        assert_eq!(solution.status(), Status::Converged);
    }

    #[test]
    fn test_functions() {
        for f in root_problems() {
            let df = |x| f.df(x);
            let solution = newton_raphson(f.as_ref(), &df, f.initial(), 1e-8, 50).unwrap();

            assert!(solution.is_converged());
            assert!(f.is_root(solution.x(), 1e-10));
        }
    }

    #[test]
    fn no_real_root() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let solution = newton_raphson(&f, &df, 0.5, 1e-6, 20).unwrap();

        assert_eq!(solution.status(), Status::Exhausted);
        assert_eq!(solution.iterations(), 20);
        assert!(solution.error() > 1e-6);
    }

    #[test]
    fn vanishing_derivative() {
        let f = |x: f64| x * x - 1.0;
        let df = |x: f64| 2.0 * x;

        let solution = newton_raphson(&f, &df, 0.0, 1e-6, 10).unwrap();

        assert_eq!(solution.status(), Status::Exhausted);
        assert_eq!(solution.iterations(), 10);
        assert!(!solution.x().is_finite());
    }

    #[test]
    fn zero_root_keeps_stale_error() {
        // The root is exactly zero, the relative error cannot be computed.
        let f = |x: f64| x;
        let df = |_: f64| 1.0;

        let solution = newton_raphson(&f, &df, 3.0, 1e-6, 5).unwrap();

        assert_eq!(solution.x(), 0.0);
        assert_eq!(solution.error(), 100.0);
        assert_eq!(solution.status(), Status::Exhausted);
    }

    #[test]
    fn zero_root_propagates_error() {
        let f = |x: f64| x;
        let df = |_: f64| 1.0;

        let mut conv = Convergence::new(1e-6, 5).unwrap();
        conv.set_zero_policy(ZeroPolicy::Propagate);

        let method = NewtonRaphson::new(&df, 3.0, &conv);
        let solution = Driver::new(&f, method, conv).run();

        // 0 / 0 after the second step.
        assert_eq!(solution.x(), 0.0);
        assert!(solution.error().is_nan());
        assert_eq!(solution.iterations(), 5);
        assert_eq!(solution.status(), Status::Exhausted);
    }

    #[test]
    fn negative_tolerance() {
        let f = Linear::default();
        let df = |x| f.df(x);

        assert_eq!(
            newton_raphson(&f, &df, -10.0, -1.0, 50),
            Err(Error::InvalidTolerance)
        );
    }

    #[test]
    fn idempotent() {
        let f = Cubic;
        let df = |x| f.df(x);

        let first = newton_raphson(&f, &df, 2.0, 1e-8, 50).unwrap();
        let second = newton_raphson(&f, &df, 2.0, 1e-8, 50).unwrap();

        assert_eq!(first, second);
        assert_abs_diff_eq!(first.x(), 1.5213797068045676, epsilon = 1e-12);
    }
}
