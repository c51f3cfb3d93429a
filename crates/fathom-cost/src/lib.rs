//! Multi-channel cost aggregation for Fathom.
//!
//! Turns a [`ChannelStack`](fathom_core::ChannelStack) of raw raster
//! channels into a single [`CostSurface`](fathom_core::CostSurface):
//!
//! 1. [`ChannelTransform`] — optional per-channel unary transform
//! 2. [`normalize_channel`] — robust percentile min-max scaling into `[0, 1]`
//! 3. weighted sum across channels
//! 4. [`gaussian_smooth`] — optional separable smoothing with edge replication
//! 5. rescale by the maximum so the surface lies in `[0, 1]`
//!
//! [`CostAggregator`] runs the whole pipeline; the individual stages are
//! public for callers that need only part of it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregate;
pub mod normalize;
pub mod smooth;
pub mod transform;

pub use aggregate::{aggregate_cost, CostAggregator, CostAggregatorBuilder};
pub use normalize::{nan_percentile, normalize_channel, ClipPercentiles};
pub use smooth::{gaussian_kernel, gaussian_smooth};
pub use transform::ChannelTransform;
