//! PSF ↔ OTF conversion.
//!
//! Forward (`psf_to_otf`):
//!   1. zero-pad the PSF on the bottom/right up to the target shape
//!   2. roll by `(-⌊ph/2⌋, -⌊pw/2⌋)` so the PSF center sits at `(0, 0)`
//!   3. forward 2-D FFT
//!
//! Inverse (`otf_to_psf`):
//!   1. inverse 2-D FFT
//!   2. roll by `(+⌊th/2⌋, +⌊tw/2⌋)`
//!   3. crop the top-left `target` window
//!
//! With `target` equal to the original PSF shape the two are exact inverses
//! up to floating-point rounding.
use ndarray::{s, Array2};
use rustfft::num_complex::Complex64;

use crate::error::{FreqError, Result};
use crate::fft::{fft2, ifft2, roll2};

/// Convert a point-spread function into its optical transfer function.
///
/// `shape` is the `(height, width)` of the image the OTF will be multiplied
/// against. The PSF may be real (`f64`) or complex.
///
/// # Errors
///
/// * [`FreqError::EmptyShape`] if `shape` has a zero dimension.
/// * [`FreqError::PsfExceedsTarget`] if the PSF is taller or wider than `shape`.
///
/// # Examples
///
/// ```
/// use freqfilt::psf_to_otf;
/// use ndarray::array;
///
/// // A single impulse transforms to a flat spectrum.
/// let otf = psf_to_otf(&array![[1.0_f64]], (4, 4)).unwrap();
/// assert!(otf.iter().all(|v| (v.re - 1.0).abs() < 1e-12 && v.im.abs() < 1e-12));
/// ```
pub fn psf_to_otf<T>(psf: &Array2<T>, shape: (usize, usize)) -> Result<Array2<Complex64>>
where
    T: Copy + Into<Complex64>,
{
    let (ph, pw) = psf.dim();
    let (th, tw) = shape;
    if th == 0 || tw == 0 {
        return Err(FreqError::EmptyShape(shape));
    }
    if ph > th || pw > tw {
        return Err(FreqError::PsfExceedsTarget { psf: (ph, pw), target: shape });
    }
    log::debug!("psf_to_otf: {ph}×{pw} PSF → {th}×{tw} OTF");

    let mut padded = Array2::<Complex64>::zeros(shape);
    padded
        .slice_mut(s![..ph, ..pw])
        .assign(&psf.mapv(Into::<Complex64>::into));

    let mut otf = roll2(&padded, (-((ph / 2) as isize), -((pw / 2) as isize)));
    fft2(&mut otf);
    Ok(otf)
}

/// Convert an optical transfer function back into a PSF of `shape`.
///
/// The result keeps whatever imaginary residue the inverse transform leaves;
/// use [`otf_to_real_psf`] when a real PSF is expected.
///
/// # Errors
///
/// * [`FreqError::EmptyShape`] if `shape` has a zero dimension.
/// * [`FreqError::CropExceedsOtf`] if `shape` is larger than the OTF.
pub fn otf_to_psf(otf: &Array2<Complex64>, shape: (usize, usize)) -> Result<Array2<Complex64>> {
    let (oh, ow) = otf.dim();
    let (th, tw) = shape;
    if th == 0 || tw == 0 {
        return Err(FreqError::EmptyShape(shape));
    }
    if th > oh || tw > ow {
        return Err(FreqError::CropExceedsOtf { otf: (oh, ow), target: shape });
    }
    log::debug!("otf_to_psf: {oh}×{ow} OTF → {th}×{tw} PSF");

    let mut spatial = otf.clone();
    ifft2(&mut spatial);
    let centered = roll2(&spatial, ((th / 2) as isize, (tw / 2) as isize));
    Ok(centered.slice(s![..th, ..tw]).to_owned())
}

/// [`otf_to_psf`] followed by dropping the imaginary part.
pub fn otf_to_real_psf(otf: &Array2<Complex64>, shape: (usize, usize)) -> Result<Array2<f64>> {
    Ok(otf_to_psf(otf, shape)?.mapv(|v| v.re))
}
