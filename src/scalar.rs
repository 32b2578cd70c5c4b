//! Scalar guard against a zero cutoff.
//!
//! `nonzero(0) = ε` (machine epsilon of the float type), anything else passes
//! through. Used before handing a possibly-zero cutoff to the Butterworth
//! generators, which divide by `D²` without checking.
use rustfft::num_traits::Float;

/// Replace an exact zero with the float type's machine epsilon.
///
/// ```
/// use freqfilt::nonzero;
/// assert_eq!(nonzero(0.0_f64), f64::EPSILON);
/// assert_eq!(nonzero(3.5_f64), 3.5);
/// ```
pub fn nonzero<T: Float>(x: T) -> T {
    if x == T::zero() {
        T::epsilon()
    } else {
        x
    }
}
