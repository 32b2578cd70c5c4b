//! Frequency-domain filter kernels.
//!
//! - [`design`]: ideal, Butterworth and Gaussian low/high-pass generators.
//! - `radial`: the squared-distance grid they all share (crate-private).
//!
//! [`kernel`] selects one of the generators at runtime from a [`KernelKind`]
//! and a [`Pass`].

pub mod design;
mod radial;

pub use design::{
    butterworth_high_pass, butterworth_low_pass, gaussian, gaussian_high_pass,
    gaussian_low_pass, ideal_high_pass, ideal_low_pass,
};

use ndarray::Array2;

/// Which side of the cutoff is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pass {
    #[default]
    Low,
    High,
}

/// Kernel family and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelKind {
    /// Brick-wall mask at radius `cutoff`.
    Ideal { cutoff: f64 },
    /// Butterworth response with cutoff radius and order `n`.
    Butterworth { cutoff: f64, order: f64 },
    /// `exp(−r²/σ²)`.
    Gaussian { sigma: f64 },
}

impl KernelKind {
    /// The radial scale parameter (cutoff or sigma).
    pub fn scale(&self) -> f64 {
        match *self {
            KernelKind::Ideal { cutoff } | KernelKind::Butterworth { cutoff, .. } => cutoff,
            KernelKind::Gaussian { sigma } => sigma,
        }
    }

    /// Same kernel family with the scale parameter replaced.
    pub fn with_scale(self, scale: f64) -> Self {
        match self {
            KernelKind::Ideal { .. } => KernelKind::Ideal { cutoff: scale },
            KernelKind::Butterworth { order, .. } => KernelKind::Butterworth { cutoff: scale, order },
            KernelKind::Gaussian { .. } => KernelKind::Gaussian { sigma: scale },
        }
    }
}

/// Build a `(height, width)` kernel of the given family and pass side.
pub fn kernel(kind: KernelKind, pass: Pass, width: usize, height: usize) -> Array2<f64> {
    match (kind, pass) {
        (KernelKind::Ideal { cutoff }, Pass::Low) => ideal_low_pass(width, height, cutoff),
        (KernelKind::Ideal { cutoff }, Pass::High) => ideal_high_pass(width, height, cutoff),
        (KernelKind::Butterworth { cutoff, order }, Pass::Low) => {
            butterworth_low_pass(width, height, cutoff, order)
        }
        (KernelKind::Butterworth { cutoff, order }, Pass::High) => {
            butterworth_high_pass(width, height, cutoff, order)
        }
        (KernelKind::Gaussian { sigma }, Pass::Low) => gaussian_low_pass(width, height, sigma),
        (KernelKind::Gaussian { sigma }, Pass::High) => gaussian_high_pass(width, height, sigma),
    }
}
