//! Separable Gaussian smoothing with edge replication.
//!
//! The kernel is a sampled, normalized Gaussian truncated at
//! `round(4 * sigma)` cells on each side. Out-of-grid taps read the
//! nearest boundary cell, so a constant raster is a fixed point and the
//! output shape always equals the input shape.

use fathom_core::Raster;

/// Kernel half-width in standard deviations.
const TRUNCATE: f64 = 4.0;

/// A normalized 1D Gaussian kernel of length `2 * radius + 1`.
///
/// `sigma <= 0` (or non-finite) yields the identity kernel `[1.0]`.
pub fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return vec![1.0];
    }
    let radius = (TRUNCATE * sigma).round() as i64;
    let denom = 2.0 * sigma * sigma;
    let mut k: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = k.iter().sum();
    for w in &mut k {
        *w /= sum;
    }
    k
}

/// Smooth `raster` with a Gaussian of standard deviation `sigma` cells.
///
/// Returns a copy of the input when `sigma <= 0`.
pub fn gaussian_smooth(raster: &Raster, sigma: f64) -> Raster {
    let kernel = gaussian_kernel(sigma);
    if kernel.len() == 1 {
        return raster.clone();
    }
    let (rows, cols) = raster.shape();
    let radius = (kernel.len() / 2) as i64;

    // Horizontal pass.
    let src = raster.as_slice();
    let mut tmp = vec![0.0; rows * cols];
    for r in 0..rows {
        let row = &src[r * cols..(r + 1) * cols];
        for c in 0..cols {
            tmp[r * cols + c] = convolve_at(row, c, radius, &kernel);
        }
    }

    // Vertical pass.
    let mut out = raster.clone();
    let dst = out.as_mut_slice();
    let mut column = vec![0.0; rows];
    for c in 0..cols {
        for (r, slot) in column.iter_mut().enumerate() {
            *slot = tmp[r * cols + c];
        }
        for r in 0..rows {
            dst[r * cols + c] = convolve_at(&column, r, radius, &kernel);
        }
    }
    out
}

fn convolve_at(line: &[f64], center: usize, radius: i64, kernel: &[f64]) -> f64 {
    let last = line.len() as i64 - 1;
    kernel
        .iter()
        .enumerate()
        .map(|(k, w)| {
            let i = (center as i64 + k as i64 - radius).clamp(0, last) as usize;
            w * line[i]
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = gaussian_kernel(1.0);
        assert_eq!(k.len(), 9);
        assert!((k.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        for i in 0..k.len() / 2 {
            assert_eq!(k[i], k[k.len() - 1 - i]);
        }
        assert!(k[4] > k[3]);
    }

    #[test]
    fn zero_sigma_is_identity() {
        assert_eq!(gaussian_kernel(0.0), vec![1.0]);
        let r = Raster::new(2, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(gaussian_smooth(&r, 0.0), r);
    }

    #[test]
    fn constant_raster_is_fixed_point() {
        let r = Raster::filled(6, 4, 0.7).unwrap();
        let s = gaussian_smooth(&r, 1.5);
        assert_eq!(s.shape(), (6, 4));
        assert!(s.as_slice().iter().all(|v| (v - 0.7).abs() < 1e-12));
    }

    #[test]
    fn spike_spreads_and_mass_is_bounded() {
        let mut r = Raster::zeros(9, 9).unwrap();
        r.set(fathom_core::Cell::new(4, 4), 1.0);
        let s = gaussian_smooth(&r, 1.0);
        assert!(s.at(4, 4) < 1.0);
        assert!(s.at(4, 5) > 0.0);
        assert!(s.at(4, 4) > s.at(4, 5));
        assert!(s.as_slice().iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn smoothing_thin_rasters_keeps_shape() {
        let r = Raster::new(1, 5, vec![0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
        let s = gaussian_smooth(&r, 2.0);
        assert_eq!(s.shape(), (1, 5));
        assert!(s.as_slice().iter().all(|v| !v.is_nan()));
    }
}
