//! Filter configuration.
//!
//! [`FilterConfig`] bundles the grid size and kernel parameters so a kernel
//! can be described once and rebuilt on demand.

use ndarray::Array2;

use crate::kernel::{kernel, KernelKind, Pass};
use crate::scalar::nonzero;

/// Everything needed to build one frequency-domain kernel.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use freqfilt::{FilterConfig, KernelKind, Pass};
///
/// let cfg = FilterConfig {
///     kind: KernelKind::Butterworth { cutoff: 40.0, order: 2.0 },
///     pass: Pass::High,
///     ..FilterConfig::default()
/// };
/// let k = cfg.build();
/// assert_eq!(k.dim(), (256, 256));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Grid width in samples (number of columns).
    ///
    /// Default: `256`.
    pub width: usize,

    /// Grid height in samples (number of rows).
    ///
    /// Default: `256`.
    pub height: usize,

    /// Kernel family and its cutoff / sigma.
    ///
    /// Default: Gaussian, `σ = 30`.
    pub kind: KernelKind,

    /// Low- or high-pass.
    ///
    /// Default: [`Pass::Low`].
    pub pass: Pass,

    /// Substitute machine epsilon for an exactly-zero cutoff or sigma before
    /// building.
    ///
    /// The generators themselves never guard; with this off, a zero
    /// Butterworth cutoff yields `inf`/`NaN` cells.
    ///
    /// Default: `false`.
    pub guard_zero_cutoff: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            kind: KernelKind::Gaussian { sigma: 30.0 },
            pass: Pass::Low,
            guard_zero_cutoff: false,
        }
    }
}

impl FilterConfig {
    /// Output shape as `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Build the kernel described by this configuration.
    pub fn build(&self) -> Array2<f64> {
        let kind = if self.guard_zero_cutoff {
            self.kind.with_scale(nonzero(self.kind.scale()))
        } else {
            self.kind
        };
        log::debug!(
            "building {:?} {:?} kernel on {}×{} grid",
            self.pass, kind, self.height, self.width
        );
        kernel(kind, self.pass, self.width, self.height)
    }
}
