//! Closed-form frequency-domain filter kernels.
//!
//! With `r² = radial_sq(w, h)`:
//!   • ideal        low = [r² ≤ D²]                high = [r² > D²]
//!   • Butterworth  low = 1 / (1 + (r²/D²)^n)      high = 1 − low
//!   • Gaussian     low = exp(−r²/σ²)               high = 1 − low
//!
//! Every kernel has shape `(height, width)` with the zero frequency at
//! `(⌊h/2⌋, ⌊w/2⌋)`, i.e. it lines up with an `fftshift`ed spectrum.
//!
//! A zero Butterworth cutoff is not guarded: `r²/0` gives `inf` off-center and
//! `NaN` at the center. Pass the cutoff through [`nonzero`](crate::nonzero)
//! first if that matters.
use ndarray::Array2;

use super::radial::radial_sq;

/// Ideal (brick-wall) low-pass: 1 inside radius `cutoff`, 0 outside.
pub fn ideal_low_pass(width: usize, height: usize, cutoff: f64) -> Array2<f64> {
    let d2 = cutoff * cutoff;
    radial_sq(width, height).mapv(|r2| if r2 <= d2 { 1.0 } else { 0.0 })
}

/// Exact complement of [`ideal_low_pass`].
pub fn ideal_high_pass(width: usize, height: usize, cutoff: f64) -> Array2<f64> {
    let d2 = cutoff * cutoff;
    radial_sq(width, height).mapv(|r2| if r2 > d2 { 1.0 } else { 0.0 })
}

/// Butterworth low-pass of the given `order`. Equals 0.5 on the cutoff radius.
pub fn butterworth_low_pass(width: usize, height: usize, cutoff: f64, order: f64) -> Array2<f64> {
    let d2 = cutoff * cutoff;
    radial_sq(width, height).mapv(|r2| 1.0 / (1.0 + (r2 / d2).powf(order)))
}

/// `1 − butterworth_low_pass`.
pub fn butterworth_high_pass(width: usize, height: usize, cutoff: f64, order: f64) -> Array2<f64> {
    butterworth_low_pass(width, height, cutoff, order).mapv(|v| 1.0 - v)
}

/// Gaussian `exp(−r²/σ²)`. With `normed` the kernel is divided by its sum so
/// that it adds up to 1.
pub fn gaussian(width: usize, height: usize, sigma: f64, normed: bool) -> Array2<f64> {
    let s2 = sigma * sigma;
    let mut g = radial_sq(width, height).mapv(|r2| (-r2 / s2).exp());
    if normed {
        let total = g.sum();
        g.mapv_inplace(|v| v / total);
    }
    g
}

/// Unnormalised [`gaussian`].
pub fn gaussian_low_pass(width: usize, height: usize, sigma: f64) -> Array2<f64> {
    gaussian(width, height, sigma, false)
}

/// `1 − gaussian_low_pass`.
pub fn gaussian_high_pass(width: usize, height: usize, sigma: f64) -> Array2<f64> {
    gaussian(width, height, sigma, false).mapv(|v| 1.0 - v)
}
