//! Various analyses for supporting the solving.
//!
//! The methods need either a bracket or an initial guess. When neither is
//! known, the function can be sampled on a grid first and the interesting
//! parts of the domain passed to a method afterwards.
//!
//! ```rust
//! use onedim::analysis::find_brackets;
//!
//! let f = |x: f64| x.sin();
//!
//! for (lower, upper) in find_brackets(&f, 1.0, 10.0, 18).unwrap() {
//!     let solution = onedim::brents_method(&f, lower, upper, 1e-10, 100).unwrap();
//!     println!("root = {}", solution.x());
//! }
//! ```

use log::debug;
use nalgebra::RealField;
use num_traits::Zero;

use crate::{
    core::{Error, Objective},
    sampling::linspace,
};

fn sample<T, F>(f: &F, start: T, stop: T, count: usize) -> Result<Vec<(T, T)>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
{
    let mut xs = linspace(start, stop, count)?;
    xs.push(stop);

    Ok(xs.into_iter().map(|x| (x, f.eval(x))).collect())
}

/// Finds intervals containing a root of `f` by sampling it at `count`
/// evenly spaced points of `[start, stop)` and at `stop`.
///
/// Returns every pair of adjacent samples where the function changes sign.
/// A sample where the function is exactly zero yields the degenerate
/// interval `(x, x)` instead. The intervals can be passed to
/// [`bisection`](crate::bisection) or [`brents_method`](crate::brents_method).
/// Roots between two samples with the same sign are missed.
///
/// Fails with [`Error::InvalidSampleCount`] if `count` is zero.
pub fn find_brackets<T, F>(f: &F, start: T, stop: T, count: usize) -> Result<Vec<(T, T)>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
{
    let samples = sample(f, start, stop, count)?;

    let mut brackets = Vec::new();
    for (i, &(x, fx)) in samples.iter().enumerate() {
        if fx.is_zero() {
            brackets.push((x, x));
        } else if let Some(&(next, f_next)) = samples.get(i + 1) {
            if fx * f_next < T::zero() {
                brackets.push((x, next));
            }
        }
    }

    debug!("found {} brackets in {} samples", brackets.len(), count + 1);

    Ok(brackets)
}

/// Finds triples forming a valley of `f` by sampling it at `count` evenly
/// spaced points of `[start, stop)` and at `stop`.
///
/// Returns every triple of adjacent samples whose middle value is not above
/// the values at its neighbours. The triples can be passed to
/// [`parabolic_interpolation`](crate::parabolic_interpolation) or their
/// endpoints to [`golden_section_search`](crate::golden_section_search).
///
/// Fails with [`Error::InvalidSampleCount`] if `count` is zero.
pub fn find_valleys<T, F>(f: &F, start: T, stop: T, count: usize) -> Result<Vec<(T, T, T)>, Error>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
{
    let samples = sample(f, start, stop, count)?;

    let valleys = samples
        .windows(3)
        .filter(|triple| {
            let (_, f1) = triple[0];
            let (_, f2) = triple[1];
            let (_, f3) = triple[2];
            f2 <= f1 && f2 <= f3
        })
        .map(|triple| (triple[0].0, triple[1].0, triple[2].0))
        .collect::<Vec<_>>();

    debug!("found {} valleys in {} samples", valleys.len(), count + 1);

    Ok(valleys)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    use crate::testing::*;

    #[test]
    fn brackets_of_sine() {
        let f = |x: f64| x.sin();

        let brackets = find_brackets(&f, 1.0, 10.0, 18).unwrap();

        assert_eq!(brackets.len(), 3);
        for ((lower, upper), k) in brackets.into_iter().zip(1..) {
            let root = k as f64 * PI;
            assert!(lower < root && root < upper);
        }
    }

    #[test]
    fn exact_zero_is_bracketed_once() {
        let f = Linear::new(1.0, -1.0);

        let brackets = find_brackets(&f, 0.0, 2.0, 4).unwrap();

        assert_eq!(brackets, vec![(1.0, 1.0)]);
    }

    #[test]
    fn exact_zero_feeds_bisection_and_brent() {
        let f = Linear::new(1.0, -1.0);

        let brackets = find_brackets(&f, 0.0, 2.0, 4).unwrap();
        let (lower, upper) = brackets[0];

        let solution = crate::bisection(&f, lower, upper, 1e-8, 100).unwrap();
        assert_eq!(solution.x(), 1.0);
        assert_eq!(solution.fx(), 0.0);
        assert!(solution.is_converged());

        let solution = crate::brents_method(&f, lower, upper, 1e-8, 100).unwrap();
        assert_eq!(solution.x(), 1.0);
        assert!(solution.is_converged());
    }

    #[test]
    fn exact_zero_at_stop() {
        let f = Linear::new(1.0, -2.0);

        let brackets = find_brackets(&f, 0.0, 2.0, 4).unwrap();

        assert_eq!(brackets, vec![(2.0, 2.0)]);
    }

    #[test]
    fn brackets_feed_bisection() {
        for f in root_problems() {
            let (lower, upper) = f.bracket();

            let brackets = find_brackets(f.as_ref(), lower, upper, 10).unwrap();
            assert_eq!(brackets.len(), 1);

            let (lower, upper) = brackets[0];
            let solution = crate::bisection(f.as_ref(), lower, upper, 1e-8, 100).unwrap();
            assert!(f.is_root(solution.x(), 1e-6));
        }
    }

    #[test]
    fn no_brackets() {
        let f = |x: f64| x * x + 1.0;
        assert_eq!(find_brackets(&f, -5.0, 5.0, 10), Ok(Vec::new()));
    }

    #[test]
    fn valley_of_test_function() {
        let f = Valley;

        let valleys = find_valleys(&f, 0.0, 4.0, 8).unwrap();

        assert_eq!(valleys, vec![(1.0, 1.5, 2.0)]);

        let (lower, midpoint, upper) = valleys[0];
        let solution =
            crate::parabolic_interpolation(&f, lower, midpoint, upper, 1e-6, 50).unwrap();
        assert_abs_diff_eq!(solution.x(), 1.4276, epsilon = 1e-4);
    }

    #[test]
    fn valleys_of_cosine() {
        let f = |x: f64| x.cos();

        let valleys = find_valleys(&f, 0.0, 4.0 * PI, 40).unwrap();

        assert_eq!(valleys.len(), 2);
        for ((lower, _, upper), k) in valleys.into_iter().zip([1.0, 3.0]) {
            let minimum = k * PI;
            assert!(lower < minimum && minimum < upper);
        }
    }

    #[test]
    fn zero_count() {
        let f = Linear::default();
        assert_eq!(find_brackets(&f, 0.0, 1.0, 0), Err(Error::InvalidSampleCount));
        assert_eq!(find_valleys(&f, 0.0, 1.0, 0), Err(Error::InvalidSampleCount));
    }
}
