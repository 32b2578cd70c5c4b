//! Spectrum magnitude for display.
//!
//! `log_magnitude` produces the usual "look at an FFT" view: `ln(1 + |F|)`
//! with the zero frequency moved to the center. Rendering is left to the
//! caller; [`normalize_unit`] maps the result onto `[0, 1]` for that.
use ndarray::Array2;
use rustfft::num_complex::Complex64;

use crate::fft::fftshift;

/// `ln(1 + |F|)`, fftshifted so DC sits at `(⌊h/2⌋, ⌊w/2⌋)`.
///
/// The output aligns with the kernels from [`crate::kernel`].
pub fn log_magnitude(spectrum: &Array2<Complex64>) -> Array2<f64> {
    fftshift(&spectrum.mapv(|v| v.norm().ln_1p()))
}

/// Linearly rescale to `[0, 1]`. A constant (or empty) array maps to zeros.
pub fn normalize_unit(a: &Array2<f64>) -> Array2<f64> {
    let lo = a.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    if span.is_nan() || span <= 0.0 {
        return Array2::zeros(a.dim());
    }
    a.mapv(|v| (v - lo) / span)
}
