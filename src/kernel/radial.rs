//! Squared radial distance grid shared by every kernel generator.
use ndarray::Array2;

/// Squared distance of each cell from the grid center `(⌊h/2⌋, ⌊w/2⌋)`.
///
/// Row offsets run `-⌊h/2⌋ ..= ⌈h/2⌉-1` and column offsets
/// `-⌊w/2⌋ ..= ⌈w/2⌉-1`, so even sizes have one more negative offset than
/// positive. Output shape is `(height, width)`.
pub(crate) fn radial_sq(width: usize, height: usize) -> Array2<f64> {
    let cy = (height / 2) as f64;
    let cx = (width / 2) as f64;
    Array2::from_shape_fn((height, width), |(r, c)| {
        let dy = r as f64 - cy;
        let dx = c as f64 - cx;
        dy * dy + dx * dx
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_center_odd() {
        let d = radial_sq(5, 3);
        assert_eq!(d.dim(), (3, 5));
        assert_eq!(d[[1, 2]], 0.0);
        assert_eq!(d[[0, 0]], 1.0 + 4.0);
        assert_eq!(d[[2, 4]], 1.0 + 4.0);
    }

    #[test]
    fn even_size_is_asymmetric() {
        // offsets: -2, -1, 0, 1
        let d = radial_sq(4, 1);
        assert_eq!(d.row(0).to_vec(), vec![4.0, 1.0, 0.0, 1.0]);
    }
}
