/// Shared helpers for the integration tests.
use freqfilt::Complex64;
use ndarray::Array2;

#[allow(unused)]
/// Install `env_logger` in test mode; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(unused)]
/// Maximum absolute difference between two real arrays.
pub fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    assert_eq!(a.dim(), b.dim(), "shape mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// Maximum modulus of the difference between two complex arrays.
pub fn max_abs_diff_complex(a: &Array2<Complex64>, b: &Array2<Complex64>) -> f64 {
    assert_eq!(a.dim(), b.dim(), "shape mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).norm()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// Deterministic pseudo-random PSF with values in `[0, 1)`.
pub fn test_psf(height: usize, width: usize, seed: u64) -> Array2<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    Array2::from_shape_fn((height, width), |_| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    })
}

#[allow(unused)]
/// Assert that `k[c + (dr, dc)] == k[c - (dr, dc)]` for every offset that stays
/// inside the grid, where `c = (⌊h/2⌋, ⌊w/2⌋)`.
pub fn assert_point_symmetric(k: &Array2<f64>, eps: f64) {
    let (h, w) = k.dim();
    let (cy, cx) = ((h / 2) as isize, (w / 2) as isize);
    for r in 0..h as isize {
        for c in 0..w as isize {
            let (mr, mc) = (2 * cy - r, 2 * cx - c);
            if mr < 0 || mc < 0 || mr >= h as isize || mc >= w as isize {
                continue;
            }
            let a = k[[r as usize, c as usize]];
            let b = k[[mr as usize, mc as usize]];
            assert!((a - b).abs() <= eps, "k[{r},{c}]={a} ≠ k[{mr},{mc}]={b}");
        }
    }
}
