//! Brent's method.
//!
//! [Brent's method](https://en.wikipedia.org/wiki/Brent%27s_method) is a
//! hybrid root-finding algorithm. It keeps a bracket with a sign change like
//! [bisection](mod@super::bisection), but tries a fast interpolation step first:
//! the [secant](mod@super::secant) step when only two distinct points are known
//! and [inverse quadratic interpolation](super::inverse_quadratic) otherwise.
//! An interpolation step is taken only if it stays well inside the bracket
//! and shrinks fast enough compared to the previous steps. Otherwise the
//! method falls back to bisection.
//!
//! The result is superlinear convergence for well-behaved functions and the
//! robustness of bisection in the worst case.
//!
//! Unlike the other methods, the tolerance is not a relative error in
//! percent. The iteration stops when the half-width of the bracket drops
//! below `2 * tolerance * max(|b|, 1)`, where `b` is the best estimate, and
//! the final error is that half-width.
//!
//! # References
//!
//! \[1\] [Algorithms for Minimization without
//! Derivatives](https://books.google.com/books?id=AITCAgAAQBAJ)
//!
//! \[2\] [Numerical Methods for
//! Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9780073397924.html)

use getset::{CopyGetters, Setters};
use log::debug;
use nalgebra::{convert, ComplexField, RealField};
use num_traits::{One, Zero};

use crate::{
    core::{BracketError, Convergence, Error, Estimate, Method, Objective, Progress, Solution},
    driver::Driver,
};

/// Options for [`Brent`] method.
#[derive(Debug, Clone, Copy, Default, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct BrentOptions {
    /// Whether to reject a bracket without a sign change at entry. Default:
    /// `false`, the caller is responsible for a valid bracket.
    check_bracket: bool,
}

/// Kind of the step taken in an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Linear interpolation through `b` and the contrapoint.
    Secant,
    /// Inverse quadratic interpolation through `a`, `b` and `c`.
    InverseQuadratic,
    /// Step to the midpoint of the bracket.
    Bisection,
}

/// State of Brent's method between iterations.
///
/// * `b` is the best estimate so far and `a` is the other end of the
///   bracket, so that `f(a)` and `f(b)` have opposite signs.
/// * `c` is the previous value of `b`, used for interpolation.
/// * `d` is the last step and `e` the step before it.
/// * `m` is the signed half-width of the bracket, `(a - b) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct BrentState<T: RealField + Copy> {
    a: T,
    b: T,
    c: T,
    fa: T,
    fb: T,
    fc: T,
    d: T,
    e: T,
    m: T,
}

impl<T: RealField + Copy> BrentState<T> {
    /// Initializes the state with the bracket `[lower, upper]`.
    pub fn new<F>(f: &F, lower: T, upper: T) -> Self
    where
        F: Objective<T> + ?Sized,
    {
        let fa = f.eval(lower);
        let fb = f.eval(upper);
        let d = upper - lower;

        Self {
            a: lower,
            b: upper,
            c: lower,
            fa,
            fb,
            fc: fa,
            d,
            e: d,
            m: T::zero(),
        }
    }

    /// Restores the invariants before computing a step.
    ///
    /// If `f(a)` and `f(b)` have the same sign, the stale end of the bracket
    /// is replaced by the contrapoint. Then `a` and `b` are swapped if needed
    /// so that `b` has the smaller function value in magnitude.
    pub fn rearrange(&mut self) {
        if self.fa.is_sign_negative() == self.fb.is_sign_negative() {
            self.a = self.c;
            self.fa = self.fc;
            self.d = self.b - self.c;
            self.e = self.d;
        }

        if self.fa.abs() < self.fb.abs() {
            self.c = self.b;
            self.fc = self.fb;
            self.b = self.a;
            self.fb = self.fa;
            self.a = self.c;
            self.fa = self.fc;
        }

        self.m = (self.a - self.b) * convert(0.5);
    }

    /// Computes the absolute tolerance for the current estimate.
    pub fn tolerance(&self, tolerance: T) -> T {
        convert::<_, T>(2.0) * tolerance * self.b.abs().max(T::one())
    }

    /// Checks whether the bracket is small enough or the root was hit.
    pub fn is_converged(&self, tol: T) -> bool {
        self.m.abs() <= tol || self.fb.is_zero()
    }

    /// Chooses the next step and stores it in `d`.
    ///
    /// Interpolation is attempted only if the step before the last one was
    /// not too small and the contrapoint is worse than the current estimate.
    /// The interpolated step is accepted only if it lands within three
    /// quarters of the bracket and is less than half of the step before the
    /// last one. Otherwise the bisection step is taken.
    pub fn choose_step(&mut self, tol: T) -> StepKind {
        let Self {
            a,
            b,
            c,
            fa,
            fb,
            fc,
            d,
            e,
            m,
        } = *self;

        let half: T = convert(0.5);
        let two: T = convert(2.0);
        let three: T = convert(3.0);

        if e.abs() >= tol && fc.abs() > fb.abs() {
            let s = fb / fc;

            let (mut p, mut q, kind) = if a == c {
                (two * m * s, T::one() - s, StepKind::Secant)
            } else {
                let q = fc / fa;
                let r = fb / fa;
                (
                    s * (two * m * q * (q - r) - (b - c) * (r - T::one())),
                    (q - T::one()) * (r - T::one()) * (s - T::one()),
                    StepKind::InverseQuadratic,
                )
            };

            if p > T::zero() {
                q = -q;
            } else {
                p = -p;
            }

            if two * p < three * m * q - (tol * q).abs() && p < (half * e * q).abs() {
                self.e = d;
                self.d = p / q;
                return kind;
            }

            debug!("{:?} step rejected, falling back to bisection", kind);
        }

        self.d = m;
        self.e = m;
        StepKind::Bisection
    }

    /// Moves the estimate by the chosen step and evaluates the function
    /// there.
    ///
    /// Steps smaller than the tolerance are replaced by a step of the
    /// tolerance size towards `a`, so that every iteration makes progress.
    pub fn advance<F>(&mut self, f: &F, tol: T)
    where
        F: Objective<T> + ?Sized,
    {
        self.c = self.b;
        self.fc = self.fb;

        if self.d.abs() > tol {
            self.b += self.d;
        } else if self.b - self.a >= T::zero() {
            debug!("step below tolerance, moving by tolerance");
            self.b -= tol;
        } else {
            debug!("step below tolerance, moving by tolerance");
            self.b += tol;
        }

        self.fb = f.eval(self.b);
    }
}

/// Brent's method. See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct Brent<T: RealField + Copy> {
    state: BrentState<T>,
}

impl<T: RealField + Copy> Brent<T> {
    /// Initializes the method with the bracket `[lower, upper]` and default
    /// options.
    pub fn new<F>(f: &F, lower: T, upper: T) -> Result<Self, Error>
    where
        F: Objective<T> + ?Sized,
    {
        Self::with_options(f, lower, upper, BrentOptions::default())
    }

    /// Initializes the method with the bracket `[lower, upper]` and given
    /// options.
    ///
    /// Fails only if [bracket check](BrentOptions::check_bracket) is enabled
    /// and the function values at the endpoints have the same (nonzero)
    /// sign.
    pub fn with_options<F>(f: &F, lower: T, upper: T, options: BrentOptions) -> Result<Self, Error>
    where
        F: Objective<T> + ?Sized,
    {
        let state = BrentState::new(f, lower, upper);

        if options.check_bracket() && state.fa * state.fb > T::zero() {
            return Err(BracketError::NoSignChange.into());
        }

        Ok(Self { state })
    }

    /// Returns the current state.
    pub fn state(&self) -> &BrentState<T> {
        &self.state
    }
}

impl<T: RealField + Copy> Method<T> for Brent<T> {
    const NAME: &'static str = "Brent";

    fn next<F>(&mut self, f: &F, conv: &Convergence<T>) -> Progress
    where
        F: Objective<T> + ?Sized,
    {
        let state = &mut self.state;

        if state.fb.is_zero() {
            debug!("exact root found");
            return Progress::Converged;
        }

        state.rearrange();

        let tol = state.tolerance(conv.tolerance());
        if state.is_converged(tol) {
            return Progress::Converged;
        }

        let kind = state.choose_step(tol);
        debug!("take {:?} step: {}", kind, state.d);

        state.advance(f, tol);
        Progress::Continue
    }

    fn finish<F>(&self, _f: &F) -> Estimate<T>
    where
        F: Objective<T> + ?Sized,
    {
        Estimate {
            x: self.state.b,
            fx: self.state.fb,
            error: self.state.m.abs(),
        }
    }
}

/// Finds a root of `f` in `[lower, upper]` using [Brent's](self) method.
///
/// The function is expected to change sign over the bracket, but this is not
/// checked. Use [`Brent::with_options`] to enable the check. Fails only if
/// the tolerance is negative.
///
/// ```rust
/// let f = |x: f64| 2.0 * x - 3.0;
/// let solution = onedim::brents_method(&f, -10.0, 10.0, 1e-6, 50).unwrap();
///
/// assert!((solution.x() - 1.5).abs() < 1e-6);
/// assert!(solution.iterations() <= 5);
/// ```
pub fn brents_method<T, F>(
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
    let method = Brent::new(f, lower, upper)?;
    Ok(Driver::new(f, method, conv).run())
}
