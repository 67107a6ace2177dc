//! Core abstractions and types for onedim.
//!
//! *Users* are mainly interested in the [`Objective`] trait (implemented for
//! all closures), the [`Solution`] returned by the methods and the stopping
//! criteria in [`Convergence`].
//!
//! Algorithm *developers* are interested in implementing the [`Method`]
//! trait and running it with the [`Driver`](crate::driver::Driver).

mod convergence;
mod error;
mod method;
mod objective;
mod solution;

pub use convergence::*;
pub use error::*;
pub use method::*;
pub use objective::*;
pub use solution::*;
