//! 2-D FFT and circular-shift helpers on `ndarray` grids.
//!
//! The transforms run the 1-D RustFFT plan over every row and then every
//! column, reusing one lane buffer and one scratch buffer:
//!   • `fft2`  — unnormalised forward transform
//!   • `ifft2` — inverse transform scaled by `1 / (h·w)`, so `ifft2 ∘ fft2 = id`
//!
//! Every re-centering in the crate goes through [`roll`], so the forward and
//! inverse shifts used by the PSF/OTF converter stay exact inverses.
use ndarray::{Array2, ArrayViewMut1, Axis, Slice};
use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftDirection, FftPlanner};

/// Forward 2-D DFT, in place. Not normalised.
pub fn fft2(data: &mut Array2<Complex64>) {
    fft2_with_direction(data, FftDirection::Forward);
}

/// Inverse 2-D DFT, in place, normalised by `1 / (h·w)`.
pub fn ifft2(data: &mut Array2<Complex64>) {
    fft2_with_direction(data, FftDirection::Inverse);
    let n = data.len();
    if n > 0 {
        let inv_scale = 1.0 / n as f64;
        data.mapv_inplace(|v| v * inv_scale);
    }
}

fn fft2_with_direction(data: &mut Array2<Complex64>, direction: FftDirection) {
    if data.is_empty() {
        return;
    }
    let (h, w) = data.dim();
    log::trace!("fft2 {direction:?} on {h}×{w} grid");

    let mut planner: FftPlanner<f64> = FftPlanner::new();
    let fft_w = planner.plan_fft(w, direction);
    let fft_h = planner.plan_fft(h, direction);

    let mut lane_buf: Vec<Complex64> = Vec::with_capacity(w.max(h));
    let scratch_len = fft_w
        .get_inplace_scratch_len()
        .max(fft_h.get_inplace_scratch_len());
    let mut scratch = vec![Complex64::default(); scratch_len];

    for row in data.rows_mut() {
        transform_lane(row, &*fft_w, &mut lane_buf, &mut scratch);
    }
    for col in data.columns_mut() {
        transform_lane(col, &*fft_h, &mut lane_buf, &mut scratch);
    }
}

/// Run `fft` over one lane. Lanes of a non-standard layout are not contiguous,
/// so the samples are staged through `buf`.
fn transform_lane(
    mut lane: ArrayViewMut1<'_, Complex64>,
    fft: &dyn Fft<f64>,
    buf: &mut Vec<Complex64>,
    scratch: &mut [Complex64],
) {
    buf.clear();
    buf.extend(lane.iter().copied());
    fft.process_with_scratch(buf, scratch);
    for (dst, &src) in lane.iter_mut().zip(buf.iter()) {
        *dst = src;
    }
}

/// Circularly shift `a` by `shift` positions along `axis`.
///
/// The element at index `i` ends up at `(i + shift) mod n`; negative shifts
/// move elements towards lower indices. Nothing is dropped or zero-filled.
pub fn roll<T: Clone>(a: &Array2<T>, shift: isize, axis: Axis) -> Array2<T> {
    let n = a.len_of(axis);
    let mut out = a.clone();
    if n == 0 {
        return out;
    }
    let s = shift.rem_euclid(n as isize) as usize;
    if s == 0 {
        return out;
    }
    // out[s..] = a[..n-s],  out[..s] = a[n-s..]
    out.slice_axis_mut(axis, Slice::from(s..))
        .assign(&a.slice_axis(axis, Slice::from(..n - s)));
    out.slice_axis_mut(axis, Slice::from(..s))
        .assign(&a.slice_axis(axis, Slice::from(n - s..)));
    out
}

/// Roll both axes at once: `(row_shift, col_shift)`.
pub fn roll2<T: Clone>(a: &Array2<T>, shift: (isize, isize)) -> Array2<T> {
    let rows_done = roll(a, shift.0, Axis(0));
    roll(&rows_done, shift.1, Axis(1))
}

/// Move the zero-frequency sample from `(0, 0)` to `(⌊h/2⌋, ⌊w/2⌋)`.
pub fn fftshift<T: Clone>(a: &Array2<T>) -> Array2<T> {
    let (h, w) = a.dim();
    roll2(a, ((h / 2) as isize, (w / 2) as isize))
}

/// Inverse of [`fftshift`]; differs from it when a dimension is odd.
pub fn ifftshift<T: Clone>(a: &Array2<T>) -> Array2<T> {
    let (h, w) = a.dim();
    roll2(a, (-((h / 2) as isize), -((w / 2) as isize)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn roll_wraps_around() {
        let a = array![[0, 1, 2, 3, 4]];
        assert_eq!(roll(&a, 2, Axis(1)), array![[3, 4, 0, 1, 2]]);
        assert_eq!(roll(&a, -1, Axis(1)), array![[1, 2, 3, 4, 0]]);
        assert_eq!(roll(&a, 5, Axis(1)), a);
        assert_eq!(roll(&a, -7, Axis(1)), array![[2, 3, 4, 0, 1]]);
    }

    #[test]
    fn roll_rows_independently_of_columns() {
        let a = array![[1, 2], [3, 4], [5, 6]];
        assert_eq!(roll(&a, 1, Axis(0)), array![[5, 6], [1, 2], [3, 4]]);
    }

    #[test]
    fn shift_pair_is_identity_for_odd_sizes() {
        let a = Array2::from_shape_fn((5, 7), |(r, c)| r * 7 + c);
        let shifted = fftshift(&a);
        // zero frequency lands at the geometric center
        assert_eq!(shifted[[2, 3]], 0);
        assert_eq!(ifftshift(&shifted), a);
    }

    #[test]
    fn fft2_of_impulse_is_flat() {
        let mut a = Array2::<Complex64>::zeros((3, 4));
        a[[0, 0]] = Complex64::new(1.0, 0.0);
        fft2(&mut a);
        for v in a.iter() {
            approx::assert_abs_diff_eq!(v.re, 1.0, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(v.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn fft2_dc_bin_is_sum() {
        let mut a = Array2::from_shape_fn((4, 6), |(r, c)| Complex64::new((r + c) as f64, 0.0));
        let total: f64 = a.iter().map(|v| v.re).sum();
        fft2(&mut a);
        approx::assert_abs_diff_eq!(a[[0, 0]].re, total, epsilon = 1e-9);
    }

    #[test]
    fn ifft2_inverts_fft2() {
        let orig = Array2::from_shape_fn((6, 5), |(r, c)| {
            Complex64::new((r as f64 * 0.7).sin(), (c as f64 * 1.3).cos())
        });
        let mut a = orig.clone();
        fft2(&mut a);
        ifft2(&mut a);
        for (x, y) in a.iter().zip(orig.iter()) {
            approx::assert_abs_diff_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn fft2_empty_is_noop() {
        let mut a = Array2::<Complex64>::zeros((0, 4));
        fft2(&mut a);
        ifft2(&mut a);
        assert_eq!(a.dim(), (0, 4));
    }
}
