//! Testing functions and utilities useful for benchmarking, debugging and
//! smoke testing.
//!
//! [`Linear`] and [`Valley`] are recommended for first tests. Others can be
//! used for specific conditions (e.g., a root or a minimum that is not
//! representable exactly).
//!
//! # References
//!
//! \[1\] [Numerical Methods for
//! Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9780073397924.html)

#![allow(unused)]

use approx::abs_diff_eq;

use crate::core::Objective;

/// Extension of the [`Objective`] trait that provides additional information
/// that is useful for testing root-finding methods.
pub trait TestRoots: Objective<f64> {
    /// A set of roots. This is mostly just for information, for example to
    /// know how close a method got even if it failed. For testing if a given
    /// point is root, [`TestRoots::is_root`] should be used.
    fn roots(&self) -> Vec<f64>;

    /// Standard bracket containing exactly one root. Using the same bracket is
    /// essential for fair comparison of methods.
    fn bracket(&self) -> (f64, f64);

    /// Standard initial guess for open methods.
    fn initial(&self) -> f64;

    /// Derivative of the function.
    fn df(&self, x: f64) -> f64;

    /// Test if given point is a root of the function, given the tolerance
    /// `eps` on the residual.
    fn is_root(&self, x: f64, eps: f64) -> bool {
        self.eval(x).abs() <= eps
    }
}

/// Extension of the [`Objective`] trait that provides additional information
/// that is useful for testing minimization methods.
pub trait TestMinimum: Objective<f64> {
    /// A set of local minimizers inside the standard bracket.
    fn minima(&self) -> Vec<f64>;

    /// Standard triple `(lower, midpoint, upper)` forming a valley.
    fn bracket(&self) -> (f64, f64, f64);

    /// Test if given point is a minimizer of the function, given the
    /// tolerance `eps` on the distance.
    fn is_minimum(&self, x: f64, eps: f64) -> bool {
        self.minima()
            .iter()
            .any(|minimum| abs_diff_eq!(x, *minimum, epsilon = eps))
    }
}

/// Linear function `a * x + b`.
///
/// All interpolating methods should find the root in a single step.
#[derive(Debug, Clone, Copy)]
pub struct Linear {
    slope: f64,
    intercept: f64,
}

impl Linear {
    /// Initializes the function with given slope and intercept.
    pub fn new(slope: f64, intercept: f64) -> Self {
        assert!(slope != 0.0, "slope must be nonzero");
        Self { slope, intercept }
    }
}

impl Default for Linear {
    fn default() -> Self {
        Self::new(2.0, -3.0)
    }
}

impl Objective<f64> for Linear {
    fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl TestRoots for Linear {
    fn roots(&self) -> Vec<f64> {
        vec![-self.intercept / self.slope]
    }

    fn bracket(&self) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn initial(&self) -> f64 {
        -10.0
    }

    fn df(&self, _: f64) -> f64 {
        self.slope
    }
}

/// Cubic function `x^3 - x - 2` \[1\].
///
/// The only real root is irrational.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubic;

impl Objective<f64> for Cubic {
    fn eval(&self, x: f64) -> f64 {
        x.powi(3) - x - 2.0
    }
}

impl TestRoots for Cubic {
    fn roots(&self) -> Vec<f64> {
        vec![1.5213797068045676]
    }

    fn bracket(&self) -> (f64, f64) {
        (1.0, 2.0)
    }

    fn initial(&self) -> f64 {
        2.0
    }

    fn df(&self, x: f64) -> f64 {
        3.0 * x * x - 1.0
    }
}

/// Transcendental function `exp(-x) - x` \[1\].
#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl Objective<f64> for Exponential {
    fn eval(&self, x: f64) -> f64 {
        (-x).exp() - x
    }
}

impl TestRoots for Exponential {
    fn roots(&self) -> Vec<f64> {
        vec![0.5671432904097838]
    }

    fn bracket(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn initial(&self) -> f64 {
        1.0
    }

    fn df(&self, x: f64) -> f64 {
        -(-x).exp() - 1.0
    }
}

/// Function `x^2 / 10 - 2 sin(x)` \[1\].
///
/// Has a single minimum on `[0, 4]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Valley;

impl Objective<f64> for Valley {
    fn eval(&self, x: f64) -> f64 {
        x * x / 10.0 - 2.0 * x.sin()
    }
}

impl TestMinimum for Valley {
    fn minima(&self) -> Vec<f64> {
        vec![1.4275517787645942]
    }

    fn bracket(&self) -> (f64, f64, f64) {
        (0.0, 1.0, 4.0)
    }
}

/// Parabola `(x - 2)^2 + 1`.
///
/// Parabolic interpolation hits the minimum exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftedParabola;

impl Objective<f64> for ShiftedParabola {
    fn eval(&self, x: f64) -> f64 {
        (x - 2.0).powi(2) + 1.0
    }
}

impl TestMinimum for ShiftedParabola {
    fn minima(&self) -> Vec<f64> {
        vec![2.0]
    }

    fn bracket(&self) -> (f64, f64, f64) {
        (0.0, 1.0, 5.0)
    }
}

/// All root-finding test problems.
pub fn root_problems() -> Vec<Box<dyn TestRoots>> {
    vec![
        Box::new(Linear::default()),
        Box::new(Cubic),
        Box::new(Exponential),
    ]
}

/// All minimization test problems.
pub fn minimum_problems() -> Vec<Box<dyn TestMinimum>> {
    vec![Box::new(Valley), Box::new(ShiftedParabola)]
}
