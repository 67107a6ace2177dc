/// The trait for functions of one real variable.
///
/// Every closure `Fn(T) -> T` is an objective, so most users never implement
/// this trait by hand. Implementing it for a type is useful when the function
/// carries parameters or should be reused across several calls.
///
/// The methods assume that the function is deterministic and free of side
/// effects: evaluating it twice at the same point must give the same value.
///
/// ```rust
/// use onedim::Objective;
///
/// // f(x) = a * x - b
/// struct Line {
///     a: f64,
///     b: f64,
/// }
///
/// impl Objective<f64> for Line {
///     fn eval(&self, x: f64) -> f64 {
///         self.a * x - self.b
///     }
/// }
///
/// let f = Line { a: 2.0, b: 3.0 };
/// let solution = onedim::bisection(&f, -10.0, 10.0, 1e-4, 50).unwrap();
/// assert!((solution.x() - 1.5).abs() < 1e-4);
/// ```
pub trait Objective<T> {
    /// Evaluates the function at `x`.
    fn eval(&self, x: T) -> T;
}

impl<T, F> Objective<T> for F
where
    F: Fn(T) -> T,
{
    fn eval(&self, x: T) -> T {
        self(x)
    }
}
