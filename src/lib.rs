//! # freqfilt — frequency-domain image filtering primitives
//!
//! Building blocks for FFT-based image restoration and enhancement:
//! conversion between a spatial point-spread function (PSF) and its optical
//! transfer function (OTF), plus ideal, Butterworth and Gaussian low/high-pass
//! kernels defined directly in frequency space.
//!
//! _Pure Rust on top of [ndarray](https://crates.io/crates/ndarray) and
//! [RustFFT](https://crates.io/crates/rustfft)._
//!
//! ## Conventions
//!
//! ```text
//! shape          (height, width)  = (rows, cols)
//! OTF            zero frequency at (0, 0)            — multiply with fft2(img)
//! kernels        zero frequency at (⌊h/2⌋, ⌊w/2⌋)   — multiply with fftshift(fft2(img))
//! ```
//!
//! The two centering conventions are bridged by [`fftshift`] / [`ifftshift`].
//!
//! ## Quick start
//!
//! ```
//! use freqfilt::{psf_to_otf, otf_to_real_psf, butterworth_low_pass};
//! use ndarray::array;
//!
//! // 3×3 box blur → OTF on a 64×48 image grid
//! let psf = array![[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]] / 9.0;
//! let otf = psf_to_otf(&psf, (64, 48)).unwrap();
//! assert_eq!(otf.dim(), (64, 48));
//!
//! // and back again
//! let back = otf_to_real_psf(&otf, (3, 3)).unwrap();
//! assert!((back[[1, 1]] - 1.0 / 9.0).abs() < 1e-12);
//!
//! // 2nd-order Butterworth low-pass, cutoff radius 10
//! let k = butterworth_low_pass(48, 64, 10.0, 2.0);
//! assert_eq!(k.dim(), (64, 48));
//! ```
//!
//! ## Zero cutoffs
//!
//! The Butterworth generators divide by `D²` and do not guard against
//! `D = 0`. Pass the cutoff through [`nonzero`] first, or set
//! [`FilterConfig::guard_zero_cutoff`].

pub mod config;
pub mod error;
pub mod fft;
pub mod kernel;
pub mod otf;
pub mod scalar;
pub mod spectrum;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config
pub use config::FilterConfig;

// error
pub use error::{FreqError, Result};

// fft — transforms + toroidal shifts
pub use fft::{fft2, ifft2, roll, roll2, fftshift, ifftshift};

// kernel — generators + runtime selection
pub use kernel::{
    kernel, KernelKind, Pass,
    ideal_low_pass, ideal_high_pass,
    butterworth_low_pass, butterworth_high_pass,
    gaussian, gaussian_low_pass, gaussian_high_pass,
};

// otf
pub use otf::{psf_to_otf, otf_to_psf, otf_to_real_psf};

// scalar
pub use scalar::nonzero;

// spectrum
pub use spectrum::{log_magnitude, normalize_unit};

pub use rustfft::num_complex::Complex64;
