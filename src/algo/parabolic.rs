//! Parabolic interpolation.
//!
//! [Successive parabolic
//! interpolation](https://en.wikipedia.org/wiki/Successive_parabolic_interpolation)
//! fits a parabola through three points forming a valley and moves to its
//! vertex. If the vertex improves the best point, it replaces it and one of
//! the outer points is dropped so that the triple remains a valley.
//!
//! When the vertex does not improve the best point, the search stops and
//! reports the best point with [`Stalled`](crate::Status::Stalled) status.
//! There is no fallback to golden-section steps, which makes the method fast
//! but less robust than the hybrid methods.
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

/// Parabolic interpolation. See [module](self) documentation for more
/// details.
#[derive(Debug, Clone)]
pub struct Parabolic<T: RealField + Copy> {
    x1: T,
    x2: T,
    x3: T,
    f1: T,
    f2: T,
    f3: T,
    minimizer: Option<T>,
    error: T,
}

impl<T: RealField + Copy> Parabolic<T> {
    /// Initializes the method with the triple `lower <= midpoint <= upper`.
    ///
    /// Fails if the points are not ordered or if the function value at
    /// `midpoint` is above the value at one of the endpoints.
    pub fn new<F>(
        f: &F,
        lower: T,
        midpoint: T,
        upper: T,
        conv: &Convergence<T>,
    ) -> Result<Self, Error>
    where
        F: Objective<T> + ?Sized,
    {
        if midpoint < lower || midpoint > upper {
            return Err(BracketError::UnorderedTriple.into());
        }

        let f1 = f.eval(lower);
        let f2 = f.eval(midpoint);
        let f3 = f.eval(upper);

        if f2 > f1 || f2 > f3 {
            return Err(BracketError::NotAValley.into());
        }

        Ok(Self {
            x1: lower,
            x2: midpoint,
            x3: upper,
            f1,
            f2,
            f3,
            minimizer: None,
            error: conv.initial_error(),
        })
    }

    /// Returns the current triple of points.
    pub fn triple(&self) -> (T, T, T) {
        (self.x1, self.x2, self.x3)
    }
}

/// Computes the vertex of the parabola through `(x1, f1)`, `(x2, f2)` and
/// `(x3, f3)`.
pub(crate) fn vertex<T: RealField + Copy>(
    (x1, f1): (T, T),
    (x2, f2): (T, T),
    (x3, f3): (T, T),
) -> T {
    let l = x2 - x1;
    let r = x2 - x3;

    let num = l * l * (f2 - f3) - r * r * (f2 - f1);
    let den = l * (f2 - f3) - r * (f2 - f1);

    x2 - num / den * convert(0.5)
}

impl<T: RealField + Copy> Method<T> for Parabolic<T> {
    const NAME: &'static str = "Parabolic interpolation";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let old = self.minimizer.unwrap_or_else(T::zero);

        let x4 = vertex((self.x1, self.f1), (self.x2, self.f2), (self.x3, self.f3));
        let f4 = f.eval(x4);

        let improved = f4 < self.f2;

        if !improved {
            debug!("vertex does not improve the best point");
            self.minimizer = Some(self.x2);
            return Progress::Stalled;
        }

        if x4 < self.x2 {
            self.x3 = self.x2;
            self.f3 = self.f2;
        } else {
            self.x1 = self.x2;
            self.f1 = self.f2;
        }

        self.x2 = x4;
        self.f2 = f4;
        self.minimizer = Some(x4);

        self.error = conv.relative_error(x4, old, self.error);

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
        let x = self.minimizer.unwrap_or(self.x2);

        Estimate {
            x,
            fx: f.eval(x),
            error: self.error,
        }
    }
}

/// Finds a minimum of `f` in the valley `lower <= midpoint <= upper` using
/// the [parabolic interpolation](self).
///
/// The tolerance is the relative error in percent. Fails if the tolerance is
/// negative or if the points do not form a valley.
///
/// ```rust
/// let f = |x: f64| x * x / 10.0 - 2.0 * x.sin();
/// let solution = onedim::parabolic_interpolation(&f, 0.0, 1.0, 4.0, 1e-4, 50).unwrap();
///
/// assert!((solution.x() - 1.4276).abs() < 1e-4);
/// ```
pub fn parabolic_interpolation<T, F>(
    f: &F,
    lower: T,
    midpoint: T,
    upper: T,
    tolerance: T,
    max_iterations: usize,
) -> Result<Solution<T>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
{
    let conv = Convergence::new(tolerance, max_iterations)?;
    let method = Parabolic::new(f, lower, midpoint, upper, &conv)?;
    Ok(Driver::new(f, method, conv).run())
}
