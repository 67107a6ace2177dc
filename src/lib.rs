#![allow(clippy::many_single_char_names)]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]

//! # Onedim
//!
//! A pure Rust implementation of classical methods for finding roots and
//! minima of functions of one real variable.
//!
//! All methods share the same stopping criteria: the iteration stops when the
//! relative change of the estimate (in percent) drops to or below the given
//! tolerance, or when the maximum number of iterations elapsed. The methods
//! are generic over the scalar type (usually `f64` or `f32`) through
//! [`nalgebra::RealField`].
//!
//! ## Algorithms
//!
//! Root finding:
//!
//! * [Bisection](mod@algo::bisection) -- Slow but guaranteed to converge for a
//!   valid bracket.
//! * [Newton-Raphson](algo::newton_raphson) -- Fast, needs the derivative.
//! * [Modified secant](mod@algo::secant) -- Newton's method with finite
//!   difference instead of the derivative.
//! * [Inverse quadratic interpolation](algo::inverse_quadratic) -- Fits a
//!   quadratic through three nearby points.
//! * [Brent's method](algo::brent) -- Recommended method to be used as a
//!   default if a bracket is known. Combines the speed of interpolation with
//!   the safety of bisection.
//!
//! Minimization:
//!
//! * [Golden-section search](algo::golden_section) -- Robust, needs only an
//!   interval.
//! * [Parabolic interpolation](algo::parabolic) -- Fast, needs a valley
//!   triple.
//!
//! ## Problem
//!
//! The function is any type implementing the [`Objective`] trait, which
//! includes all closures `Fn(T) -> T`.
//!
//! ```rust
//! let f = |x: f64| x.powi(3) - x - 2.0;
//!
//! let solution = onedim::brents_method(&f, 1.0, 2.0, 1e-10, 100).unwrap();
//!
//! assert!(solution.is_converged());
//! assert!(solution.fx().abs() < 1e-8);
//! ```
//!
//! ## Solving
//!
//! Invalid input (negative tolerance, an interval without sign change, a
//! triple that is not a valley) is reported as an [`Error`]. Failing to
//! converge is not an error: the [`Solution`] carries a [`Status`] and the
//! number of iterations, so it is up to the caller to decide what to do.
//!
//! ```rust
//! use onedim::Status;
//!
//! let f = |x: f64| x * x + 1.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let solution = onedim::newton_raphson(&f, &df, 1.0, 1e-8, 20).unwrap();
//!
//! match solution.status() {
//!     Status::Converged => println!("solved"),
//!     _ => println!("maximum number of iterations exceeded"),
//! }
//! ```
//!
//! For fine-grained control, the methods can be run step by step with the
//! [`Driver`].
//!
//! ## License
//!
//! Licensed under MIT.

pub mod algo;
pub mod analysis;
mod core;
pub mod driver;
pub mod sampling;

pub use algo::{
    bisection, brents_method, golden_section_search, inverse_quadratic_interpolation,
    newton_raphson, parabolic_interpolation, secant,
};
pub use crate::core::*;
pub use driver::Driver;

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(not(feature = "testing"))]
pub(crate) mod testing;

pub use nalgebra;
