//! The collection of implemented methods.
//!
//! Root-finding methods: [bisection](mod@bisection), [Newton-Raphson
//! method](mod@newton_raphson), [modified secant](mod@secant), [inverse
//! quadratic interpolation](mod@inverse_quadratic) and [Brent's
//! method](mod@brent). Minimization methods: [golden-section
//! search](mod@golden_section) and [parabolic interpolation](mod@parabolic).

pub mod bisection;
pub mod brent;
pub mod golden_section;
pub mod inverse_quadratic;
pub mod newton_raphson;
pub mod parabolic;
pub mod secant;

pub use bisection::{bisection, Bisection};
pub use brent::{brents_method, Brent, BrentOptions, BrentState, StepKind};
pub use golden_section::{golden_section_search, GoldenSection};
pub use inverse_quadratic::{
    inverse_quadratic_interpolation, InverseQuadratic, InverseQuadraticOptions,
};
pub use newton_raphson::{newton_raphson, NewtonRaphson};
pub use parabolic::{parabolic_interpolation, Parabolic};
pub use secant::{secant, Secant, SecantOptions};
