//! The iteration loop shared by all methods.
//!
//! The [`Driver`] runs a [`Method`] under given [`Convergence`] criteria. All
//! functions in [`algo`](crate::algo) are thin wrappers that validate the
//! input, initialize the method and run the driver:
//!
//! ```rust
//! use onedim::algo::Bisection;
//! use onedim::{Convergence, Driver};
//!
//! let f = |x: f64| 2.0 * x - 3.0;
//!
//! let conv = Convergence::new(1e-4, 50).unwrap();
//! let method = Bisection::new(&f, -10.0, 10.0, &conv).unwrap();
//!
//! let solution = Driver::new(&f, method, conv).run();
//! assert!(solution.is_converged());
//! ```
//!
//! If you need more control over the iteration process, you can do the
//! iterations manually:
//!
//! ```rust
//! # use onedim::algo::Bisection;
//! # use onedim::{Convergence, Driver};
//! #
//! # let f = |x: f64| 2.0 * x - 3.0;
//! #
//! # let conv = Convergence::new(1e-4, 50).unwrap();
//! # let method = Bisection::new(&f, -10.0, 10.0, &conv).unwrap();
//! #
//! let mut driver = Driver::new(&f, method, conv);
//!
//! while driver.next().is_some() {
//!     let estimate = driver.estimate();
//!     println!("iter = {}\tx = {}", driver.iter(), estimate.x);
//! }
//!
//! let solution = driver.solution();
//! ```
//!
//! The iteration counter follows the convention of the classical
//! formulations: the returned number of iterations is the index of the
//! iteration at which the criterion was satisfied, or the maximum number of
//! iterations if it never was. Thus `iterations < max_iterations` means that
//! the process stopped early.

use std::marker::PhantomData;

use log::debug;
use nalgebra::RealField;

use crate::core::{Convergence, Estimate, Method, Objective, Progress, Solution, Status};

/// The driver of an iterative process. See [module](self) documentation for
/// more details.
pub struct Driver<'a, T: RealField + Copy, F: ?Sized, M> {
    f: &'a F,
    method: M,
    conv: Convergence<T>,
    iter: usize,
    status: Option<Status>,
    _phantom: PhantomData<T>,
}

impl<'a, T, F, M> Driver<'a, T, F, M>
where
    T: RealField + Copy,
    F: Objective<T> + ?Sized,
    M: Method<T>,
{
    /// Initializes the driver with the function, the method and the stopping
    /// criteria.
    pub fn new(f: &'a F, method: M, conv: Convergence<T>) -> Self {
        Self {
            f,
            method,
            conv,
            iter: 0,
            status: None,
            _phantom: PhantomData,
        }
    }

    /// Does one iteration of the process.
    ///
    /// Returns `None` once the process has finished, either because the
    /// method stopped or the maximum number of iterations elapsed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Progress> {
        if self.status.is_some() {
            return None;
        }

        if self.iter >= self.conv.max_iterations() {
            self.finish(Status::Exhausted);
            return None;
        }

        let progress = self.method.next(self.f, &self.conv);

        match progress {
            Progress::Continue => self.iter += 1,
            Progress::Converged => self.finish(Status::Converged),
            Progress::Stalled => self.finish(Status::Stalled),
        }

        Some(progress)
    }

    /// Runs the iterative process until the method stops or the maximum
    /// number of iterations elapses.
    pub fn run(mut self) -> Solution<T> {
        while self.next().is_some() {}
        self.solution()
    }

    /// Returns the current estimate.
    pub fn estimate(&self) -> Estimate<T> {
        self.method.finish(self.f)
    }

    /// Returns the solution at the current state of the process.
    ///
    /// If the process has not finished yet, the status is
    /// [`Exhausted`](Status::Exhausted).
    pub fn solution(&self) -> Solution<T> {
        let Estimate { x, fx, error } = self.estimate();
        let status = self.status.unwrap_or(Status::Exhausted);
        Solution::new(x, fx, error, self.iter, status)
    }

    /// Returns the current iteration number.
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Returns the status if the process has finished.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the name of the used method.
    pub fn name(&self) -> &str {
        M::NAME
    }

    fn finish(&mut self, status: Status) {
        debug!(
            "{} finished with status {:?} after {} iterations",
            M::NAME,
            status,
            self.iter
        );
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use crate::{algo::Bisection, testing::Linear};

    use super::*;

    struct Stubborn {
        calls: usize,
        stop_after: Option<usize>,
    }

    impl Method<f64> for Stubborn {
        const NAME: &'static str = "Stubborn";

        fn next<F>(&mut self, _f: &F, _conv: &Convergence<f64>) -> Progress
        where
            F: Objective<f64> + ?Sized,
        {
            self.calls += 1;
            match self.stop_after {
                Some(n) if self.calls > n => Progress::Converged,
                _ => Progress::Continue,
            }
        }

        fn finish<F>(&self, _f: &F) -> Estimate<f64>
        where
            F: Objective<f64> + ?Sized,
        {
            Estimate {
                x: self.calls as f64,
                fx: 0.0,
                error: 1.0,
            }
        }
    }

    #[test]
    fn exhausted_reports_budget() {
        let f = |x: f64| x;
        let conv = Convergence::new(0.0, 7).unwrap();
        let method = Stubborn {
            calls: 0,
            stop_after: None,
        };

        let solution = Driver::new(&f, method, conv).run();

        assert_eq!(solution.status(), Status::Exhausted);
        assert_eq!(solution.iterations(), 7);
        assert_eq!(solution.x(), 7.0);
    }

    #[test]
    fn converged_reports_loop_index() {
        let f = |x: f64| x;
        let conv = Convergence::new(0.0, 7).unwrap();
        let method = Stubborn {
            calls: 0,
            stop_after: Some(3),
        };

        let solution = Driver::new(&f, method, conv).run();

        // The fourth call (index 3) stops the process.
        assert_eq!(solution.status(), Status::Converged);
        assert_eq!(solution.iterations(), 3);
    }

    #[test]
    fn zero_budget() {
        let f = |x: f64| x;
        let conv = Convergence::new(0.0, 0).unwrap();
        let method = Stubborn {
            calls: 0,
            stop_after: Some(0),
        };

        let solution = Driver::new(&f, method, conv).run();

        assert_eq!(solution.status(), Status::Exhausted);
        assert_eq!(solution.iterations(), 0);
        assert_eq!(solution.x(), 0.0);
    }

    #[test]
    fn manual_iterations() {
        let f = Linear::default();
        let conv = Convergence::new(1e-4, 50).unwrap();
        let method = Bisection::new(&f, -10.0, 10.0, &conv).unwrap();
        let mut driver = Driver::new(&f, method, conv);

        assert_eq!(driver.name(), "Bisection");

        let mut steps = 0;
        while let Some(progress) = driver.next() {
            steps += 1;
            if progress == Progress::Continue {
                assert_eq!(driver.iter(), steps);
                assert_eq!(driver.status(), None);
            }
        }

        assert_eq!(driver.status(), Some(Status::Converged));
        assert!(driver.next().is_none());

        let manual = driver.solution();
        let automatic = crate::algo::bisection(&f, -10.0, 10.0, 1e-4, 50).unwrap();
        assert_eq!(manual, automatic);
    }
}
