//! Error type shared by the shape-checked operations.
//!
//! Only the PSF/OTF converter can fail; the kernel generators are total over
//! their inputs and never return an error.
use thiserror::Error;

/// Shape errors raised by [`psf_to_otf`](crate::psf_to_otf) and
/// [`otf_to_psf`](crate::otf_to_psf).
///
/// Shapes are always reported as `(height, width)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FreqError {
    /// The PSF is larger than the target grid in at least one dimension, so
    /// zero-padding would need a negative pad amount.
    #[error("PSF of shape {psf:?} does not fit in target shape {target:?}")]
    PsfExceedsTarget {
        psf: (usize, usize),
        target: (usize, usize),
    },

    /// The requested PSF window is larger than the OTF it is cropped from.
    #[error("crop shape {target:?} exceeds OTF shape {otf:?}")]
    CropExceedsOtf {
        otf: (usize, usize),
        target: (usize, usize),
    },

    /// A target shape has a zero dimension.
    #[error("target shape {0:?} has a zero dimension")]
    EmptyShape((usize, usize)),
}

pub type Result<T> = std::result::Result<T, FreqError>;
