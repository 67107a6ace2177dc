//! Golden-section search.
//!
//! [Golden-section search](https://en.wikipedia.org/wiki/Golden-section_search)
//! minimizes a function over an interval by probing two interior points
//!
//! ```text
//! x1 = lower + d,  x2 = upper - d,  where d = (φ - 1) * (upper - lower)
//! ```
//!
//! and discarding the part of the interval beyond the worse probe. The golden
//! ratio φ keeps the proportions of the interval the same in every iteration.
//!
//! The interval is not validated. If the function has no interior minimum,
//! the search converges to one of the endpoints.
//!
//! # References
//!
//! \[1\] [Numerical Methods for
//! Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9780073397924.html)

use nalgebra::{convert, ComplexField, RealField};
use num_traits::One;

use crate::{
    core::{Convergence, Error, Estimate, Method, Objective, Progress, Solution},
    driver::Driver,
};

/// Golden-section search. See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct GoldenSection<T: RealField + Copy> {
    lower: T,
    upper: T,
    minimizer: Option<T>,
    error: T,
}

impl<T: RealField + Copy> GoldenSection<T> {
    /// Initializes the method with the interval `[lower, upper]`.
    pub fn new(lower: T, upper: T, conv: &Convergence<T>) -> Self {
        Self {
            lower,
            upper,
            minimizer: None,
            error: conv.initial_error(),
        }
    }

    /// Returns the golden ratio φ.
    pub fn golden_ratio() -> T {
        (T::one() + convert::<_, T>(5.0).sqrt()) * convert(0.5)
    }

    /// Returns the current interval.
    pub fn interval(&self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T: RealField + Copy> Method<T> for GoldenSection<T> {
    const NAME: &'static str = "Golden-section search";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let phi = Self::golden_ratio();

        let d = (phi - T::one()) * (self.upper - self.lower);
        let x1 = self.lower + d;
        let x2 = self.upper - d;

        let x = if f.eval(x1) < f.eval(x2) {
            self.lower = x2;
            x1
        } else {
            self.upper = x1;
            x2
        };
        self.minimizer = Some(x);

        // Maximum distance of the minimum from the estimate, relative to the
        // estimate.
        let width = (convert::<_, T>(2.0) - phi) * (self.upper - self.lower);
        self.error = conv.percent_of(width, x, self.error);

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
        let x = self
            .minimizer
            .unwrap_or_else(|| (self.lower + self.upper) * convert(0.5));

        Estimate {
            x,
            fx: f.eval(x),
            error: self.error,
        }
    }
}

/// Finds a minimum of `f` in `[lower, upper]` using the [golden-section
/// search](self).
///
/// The tolerance is the relative error in percent. Fails only if the
/// tolerance is negative.
///
/// ```rust
/// let f = |x: f64| x * x / 10.0 - 2.0 * x.sin();
/// let solution = onedim::golden_section_search(&f, 0.0, 4.0, 1e-4, 50).unwrap();
///
/// assert!((solution.x() - 1.4276).abs() < 1e-4);
/// assert!((solution.fx() + 1.7757).abs() < 1e-4);
/// ```
pub fn golden_section_search<T, F>(
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
    let method = GoldenSection::new(lower, upper, &conv);
    Ok(Driver::new(f, method, conv).run())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    use crate::{core::Status, testing::*};

    #[test]
    fn valley() {
        let f = Valley;
        let tolerance = 1e-4;

        let solution = golden_section_search(&f, 0.0, 4.0, tolerance, 50).unwrap();

        assert_abs_diff_eq!(solution.x(), 1.4276, epsilon = tolerance);
        assert_abs_diff_eq!(solution.fx(), -1.7757, epsilon = tolerance);
        assert!(solution.error() <= tolerance);
        assert!(solution.iterations() < 50);
        assert_eq!(solution.status(), Status::Converged);
    }

    #[test]
    fn test_functions() {
        for f in minimum_problems() {
            let (lower, _, upper) = f.bracket();
            let solution = golden_section_search(f.as_ref(), lower, upper, 1e-6, 100).unwrap();

            assert!(solution.is_converged());
            assert!(f.is_minimum(solution.x(), 1e-5));
        }
    }

    #[test]
    fn golden_proportion() {
        let phi: f64 = GoldenSection::golden_ratio();
        assert_relative_eq!(phi, 1.618033988749895);
        assert_relative_eq!(phi * phi, phi + 1.0, max_relative = 1e-12);
    }

    #[test]
    fn interval_shrinks_by_golden_ratio() {
        let f = Valley;
        let conv = Convergence::new(0.0, 10).unwrap();
        let mut method = GoldenSection::new(0.0, 4.0, &conv);
        let shrink = GoldenSection::<f64>::golden_ratio() - 1.0;

        let mut width = 4.0;
        for _ in 0..10 {
            method.next(&f, &conv);
            let (lower, upper) = method.interval();
            assert_relative_eq!(upper - lower, width * shrink, max_relative = 1e-12);
            assert!(lower <= 1.42755 && 1.42755 <= upper);
            width = upper - lower;
        }
    }

    #[test]
    fn monotone_function_converges_to_endpoint() {
        let f = |x: f64| x;

        let solution = golden_section_search(&f, 1.0, 2.0, 1e-6, 100).unwrap();

        assert_abs_diff_eq!(solution.x(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_budget_returns_midpoint() {
        let f = Valley;

        let solution = golden_section_search(&f, 0.0, 4.0, 1e-4, 0).unwrap();

        assert_eq!(solution.x(), 2.0);
        assert_eq!(solution.iterations(), 0);
        assert_eq!(solution.status(), Status::Exhausted);
    }

    #[test]
    fn idempotent() {
        let f = Valley;

        let first = golden_section_search(&f, 0.0, 4.0, 1e-8, 100).unwrap();
        let second = golden_section_search(&f, 0.0, 4.0, 1e-8, 100).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn negative_tolerance() {
        let f = Valley;
        assert_eq!(
            golden_section_search(&f, 0.0, 4.0, -1e-4, 50),
            Err(Error::InvalidTolerance)
        );
    }
}
