//! Sampling of the domain.
//!
//! Useful for scanning a function before choosing a bracket or an initial
//! guess for one of the methods. See also [`analysis`](crate::analysis).

use nalgebra::{convert, RealField};

use crate::core::Error;

/// Returns `count` evenly spaced values over the half-open interval
/// `[start, stop)`.
///
/// The step is `(stop - start) / count`, so `stop` itself is never included.
/// Fails with [`Error::InvalidSampleCount`] if `count` is zero.
///
/// ```rust
/// let xs = onedim::sampling::linspace(0.0, 1.0, 4).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn linspace<T: RealField + Copy>(start: T, stop: T, count: usize) -> Result<Vec<T>, Error> {
    if count == 0 {
        return Err(Error::InvalidSampleCount);
    }

    let step = (stop - start) / convert(count as f64);

    Ok((0..count)
        .map(|i| start + step * convert(i as f64))
        .collect())
}
