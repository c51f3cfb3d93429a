//! Weighted multi-channel cost aggregation.
//!
//! Constructed via the builder pattern: [`CostAggregator::builder`].
//! [`aggregate_cost`] is a shorthand for one-off aggregation with the
//! default percentile clipping.

use fathom_core::{ChannelStack, CostError, CostSurface, Raster};
use tracing::debug;

use crate::normalize::{normalize_channel, ClipPercentiles};
use crate::smooth::gaussian_smooth;
use crate::transform::ChannelTransform;

/// Combines a [`ChannelStack`] into a single [`CostSurface`].
///
/// ```text
/// raw[h,w] = Σ_i weights[i] * normalize(transforms[i](channel_i))[h,w]
/// raw      = gaussian_smooth(raw, smooth_sigma)     if smooth_sigma > 0
/// cost     = raw / max(raw)                         if max(raw) > 0
/// ```
///
/// The aggregator is configured once and can be applied to any stack
/// whose channel count matches its weights.
#[derive(Clone, Debug)]
pub struct CostAggregator {
    weights: Vec<f64>,
    transforms: Vec<ChannelTransform>,
    smooth_sigma: f64,
    clip: Option<ClipPercentiles>,
}

/// Builder for [`CostAggregator`].
///
/// Required field: `weights`.
#[derive(Clone, Debug)]
pub struct CostAggregatorBuilder {
    weights: Option<Vec<f64>>,
    transforms: Option<Vec<ChannelTransform>>,
    smooth_sigma: f64,
    clip: Option<ClipPercentiles>,
}

impl CostAggregator {
    /// Create a new builder for configuring a `CostAggregator`.
    pub fn builder() -> CostAggregatorBuilder {
        CostAggregatorBuilder {
            weights: None,
            transforms: None,
            smooth_sigma: 0.0,
            clip: Some(ClipPercentiles::DEFAULT),
        }
    }

    /// Per-channel weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of channels this aggregator expects.
    pub fn channel_count(&self) -> usize {
        self.weights.len()
    }

    /// Smoothing standard deviation in cells (`0` disables smoothing).
    pub fn smooth_sigma(&self) -> f64 {
        self.smooth_sigma
    }

    /// Percentile clipping used by the normalizer.
    pub fn clip_percentiles(&self) -> Option<ClipPercentiles> {
        self.clip
    }

    /// Aggregate `stack` into a cost surface.
    ///
    /// # Errors
    ///
    /// [`CostError::WeightCount`] or [`CostError::TransformCount`] if the
    /// stack's channel count does not match the configuration. Both are
    /// checked before any channel is touched.
    pub fn aggregate(&self, stack: &ChannelStack) -> Result<CostSurface, CostError> {
        let channels = stack.channel_count();
        if self.weights.len() != channels {
            return Err(CostError::WeightCount {
                channels,
                weights: self.weights.len(),
            });
        }
        if !self.transforms.is_empty() && self.transforms.len() != channels {
            return Err(CostError::TransformCount {
                channels,
                transforms: self.transforms.len(),
            });
        }

        // Weights are applied relative to the largest one so the sum stays
        // finite; the final rescale cancels the common factor.
        let peak = self.weights.iter().copied().fold(0.0, f64::max);
        let (rows, cols) = stack.shape();
        let mut raw = Raster::zeros(rows, cols)?;
        for (i, channel) in stack.iter().enumerate() {
            if self.weights[i] == 0.0 {
                continue;
            }
            let w = self.weights[i] / peak;
            let transformed = match self.transforms.get(i) {
                Some(t) => t.apply(channel),
                None => channel.clone(),
            };
            let normalized = normalize_channel(&transformed, self.clip);
            for (acc, v) in raw.as_mut_slice().iter_mut().zip(normalized.as_slice()) {
                *acc += w * v;
            }
        }

        if self.smooth_sigma > 0.0 {
            raw = gaussian_smooth(&raw, self.smooth_sigma);
        }

        let max = raw.nan_max().unwrap_or(0.0);
        if max > 0.0 {
            for v in raw.as_mut_slice() {
                *v /= max;
            }
        }

        debug!(
            channels,
            rows,
            cols,
            smooth_sigma = self.smooth_sigma,
            raw_max = max,
            "aggregated cost surface"
        );
        Ok(CostSurface::new(raw)?)
    }
}

impl CostAggregatorBuilder {
    /// Set the per-channel weights. Each must be finite and `>= 0`.
    pub fn weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.weights = Some(weights.into());
        self
    }

    /// Set one transform per channel (default: identity for every channel).
    pub fn transforms(mut self, transforms: impl Into<Vec<ChannelTransform>>) -> Self {
        self.transforms = Some(transforms.into());
        self
    }

    /// Set the Gaussian smoothing sigma in cells (default: 0, disabled).
    pub fn smooth_sigma(mut self, sigma: f64) -> Self {
        self.smooth_sigma = sigma;
        self
    }

    /// Set percentile clipping for the normalizer (default: 1st/99th).
    ///
    /// `None` scales by the raw min and max.
    pub fn clip_percentiles(mut self, clip: Option<ClipPercentiles>) -> Self {
        self.clip = clip;
        self
    }

    /// Build the aggregator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `weights` is not set
    /// - any weight is negative, NaN, or infinite
    /// - `transforms` is set and its length differs from `weights`
    /// - `smooth_sigma` is negative, NaN, or infinite
    pub fn build(self) -> Result<CostAggregator, CostError> {
        let weights = self.weights.ok_or(CostError::MissingWeights)?;
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(CostError::InvalidWeight { index, value });
        }

        let transforms = self.transforms.unwrap_or_default();
        if !transforms.is_empty() && transforms.len() != weights.len() {
            return Err(CostError::TransformCount {
                channels: weights.len(),
                transforms: transforms.len(),
            });
        }

        if !self.smooth_sigma.is_finite() || self.smooth_sigma < 0.0 {
            return Err(CostError::InvalidSigma {
                value: self.smooth_sigma,
            });
        }

        Ok(CostAggregator {
            weights,
            transforms,
            smooth_sigma: self.smooth_sigma,
            clip: self.clip,
        })
    }
}

/// Aggregate `stack` with `weights`, optional per-channel `transforms`,
/// and optional smoothing, using the default 1st/99th percentile clipping.
pub fn aggregate_cost(
    stack: &ChannelStack,
    weights: &[f64],
    transforms: Option<&[ChannelTransform]>,
    smooth_sigma: f64,
) -> Result<CostSurface, CostError> {
    let mut builder = CostAggregator::builder()
        .weights(weights)
        .smooth_sigma(smooth_sigma);
    if let Some(t) = transforms {
        builder = builder.transforms(t);
    }
    builder.build()?.aggregate(stack)
}
