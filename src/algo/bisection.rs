//! Bisection method.
//!
//! [Bisection](https://en.wikipedia.org/wiki/Bisection_method) repeatedly
//! halves an interval in which the function changes sign and keeps the half
//! that still contains the sign change. It converges linearly, but it cannot
//! diverge once a valid bracket is given.
//!
//! # References
//!
//! \[1\] [Numerical Methods for
//! Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9780073397924.html)

use log::debug;
use nalgebra::{convert, RealField};
use num_traits::Zero;

use crate::{
    core::{BracketError, Convergence, Error, Estimate, Method, Objective, Progress, Solution},
    driver::Driver,
};

/// Bisection method. See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct Bisection<T: RealField + Copy> {
    lower: T,
    upper: T,
    f_lower: T,
    root: T,
    error: T,
}

impl<T: RealField + Copy> Bisection<T> {
    /// Initializes the method with the bracket `[lower, upper]`.
    ///
    /// Fails with [`BracketError::NoSignChange`] if the function values at
    /// the endpoints have the same (nonzero) sign.
    pub fn new<F>(f: &F, lower: T, upper: T, conv: &Convergence<T>) -> Result<Self, Error>
    where
        F: Objective<T> + ?Sized,
    {
        let f_lower = f.eval(lower);

        if f_lower * f.eval(upper) > T::zero() {
            return Err(BracketError::NoSignChange.into());
        }

        Ok(Self {
            lower,
            upper,
            f_lower,
            root: lower,
            error: conv.initial_error(),
        })
    }

    /// Returns the current bracket.
    pub fn bracket(&self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T: RealField + Copy> Method<T> for Bisection<T> {
    const NAME: &'static str = "Bisection";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let old = self.root;
        self.root = (self.lower + self.upper) * convert(0.5);
        self.error = conv.relative_error(self.root, old, self.error);

        let f_root = f.eval(self.root);
        let test = self.f_lower * f_root;

        if test < T::zero() {
            self.upper = self.root;
        } else if test > T::zero() {
            self.lower = self.root;
            self.f_lower = f_root;
        } else {
            debug!("midpoint is an exact root");
            self.error = T::zero();
        }

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

/// Finds a root of `f` in `[lower, upper]` using the [bisection](self)
/// method.
///
/// The tolerance is the relative error in percent. Fails if the tolerance is
/// negative or if the function does not change sign over the bracket.
///
/// ```rust
/// let f = |x: f64| 2.0 * x - 3.0;
/// let solution = onedim::bisection(&f, -10.0, 10.0, 1e-4, 50).unwrap();
///
/// assert!((solution.x() - 1.5).abs() < 1e-4);
/// assert!(solution.iterations() < 50);
/// ```
pub fn bisection<T, F>(
    f: &F,
    lower: T,
    upper: T,
    tolerance: T,
    max_iterations: usize,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
{
    let conv = Convergence::new(tolerance, max_iterations)?;
    let method = Bisection::new(f, lower, upper, &conv)?;
    Ok(Driver::new(f, method, conv).run())
}
