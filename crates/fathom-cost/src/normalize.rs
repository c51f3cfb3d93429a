//! Robust percentile-based min-max normalization of a single channel.
//!
//! ```text
//! lo  = percentile(channel, low_pct)     (NaN ignored)
//! hi  = percentile(channel, high_pct)
//! out = clip((channel - lo) / (hi - lo), 0, 1)
//! ```
//!
//! Percentiles use linear interpolation between the two bracketing order
//! statistics at rank `p / 100 * (n - 1)`. When `hi` and `lo` are
//! numerically indistinguishable the channel carries no contrast and the
//! result is all zeros. NaN inputs normalize to `0.0`.

use fathom_core::{CostError, Raster};

/// Absolute tolerance for the constant-channel check.
const CLOSE_ATOL: f64 = 1e-8;
/// Relative tolerance for the constant-channel check.
const CLOSE_RTOL: f64 = 1e-5;

/// Percentile bounds `(low, high)` used to clip outliers before scaling.
///
/// Invariant: `0 <= low <= high <= 100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPercentiles {
    low: f64,
    high: f64,
}

impl ClipPercentiles {
    /// The 1st / 99th percentile pair.
    pub const DEFAULT: ClipPercentiles = ClipPercentiles {
        low: 1.0,
        high: 99.0,
    };

    /// Validate and build a percentile pair.
    pub fn new(low: f64, high: f64) -> Result<Self, CostError> {
        let valid =
            low.is_finite() && high.is_finite() && 0.0 <= low && low <= high && high <= 100.0;
        if !valid {
            return Err(CostError::InvalidPercentiles { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower percentile.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper percentile.
    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for ClipPercentiles {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The `pct`-th percentile of the non-NaN values, or `None` if there are none.
///
/// `pct` is clamped to `[0, 100]`.
pub fn nan_percentile(values: &[f64], pct: f64) -> Option<f64> {
    let sorted = sorted_non_nan(values);
    if sorted.is_empty() {
        return None;
    }
    Some(percentile_sorted(&sorted, pct))
}

fn sorted_non_nan(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    let rank = pct.clamp(0.0, 100.0) / 100.0 * (n - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let frac = rank - below as f64;
    let (a, b) = (sorted[below], sorted[above]);
    if below == above || a == b {
        a
    } else {
        a + (b - a) * frac
    }
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= CLOSE_ATOL + CLOSE_RTOL * b.abs()
}

/// Normalize `channel` into `[0, 1]`.
///
/// With `clip = Some(p)` the scaling bounds are the `p.low()` / `p.high()`
/// percentiles; with `None` they are the raw NaN-ignoring min and max.
/// A constant (or all-NaN) channel yields an all-zero raster of the same
/// shape. The output never contains NaN.
pub fn normalize_channel(channel: &Raster, clip: Option<ClipPercentiles>) -> Raster {
    let bounds = match clip {
        Some(p) => {
            let sorted = sorted_non_nan(channel.as_slice());
            if sorted.is_empty() {
                None
            } else {
                Some((
                    percentile_sorted(&sorted, p.low),
                    percentile_sorted(&sorted, p.high),
                ))
            }
        }
        None => channel.nan_min().zip(channel.nan_max()),
    };

    let Some((lo, hi)) = bounds else {
        return channel.map(|_| 0.0);
    };
    if is_close(hi, lo) {
        return channel.map(|_| 0.0);
    }

    let span = hi - lo;
    channel.map(|v| {
        let n = ((v - lo) / span).clamp(0.0, 1.0);
        if n.is_nan() {
            0.0
        } else {
            n
        }
    })
}
