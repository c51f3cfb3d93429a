//! Per-channel unary transforms applied before normalization.

use std::fmt;
use std::sync::Arc;

use fathom_core::Raster;

/// An element-wise function applied to one channel before it is normalized.
///
/// Transforms run on raw channel values, so they may produce NaN (for
/// example `Sqrt` of a negative value). NaN cells are ignored by the
/// percentile computation and normalize to `0.0`.
#[derive(Clone, Default)]
pub enum ChannelTransform {
    /// Leave values unchanged.
    #[default]
    Identity,
    /// `ln(1 + x)`.
    Log1p,
    /// `|x|`.
    Abs,
    /// `sqrt(x)`.
    Sqrt,
    /// `x * factor`.
    Scale(f64),
    /// Clamp into `[min, max]`.
    Clip {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Arbitrary caller-supplied function.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl ChannelTransform {
    /// Wrap a closure as a [`ChannelTransform::Custom`].
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Evaluate the transform at one value.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Log1p => x.ln_1p(),
            Self::Abs => x.abs(),
            Self::Sqrt => x.sqrt(),
            Self::Scale(k) => x * k,
            Self::Clip { min, max } => x.max(*min).min(*max),
            Self::Custom(f) => f(x),
        }
    }

    /// Apply the transform to every cell of `channel`.
    pub fn apply(&self, channel: &Raster) -> Raster {
        match self {
            Self::Identity => channel.clone(),
            _ => channel.map(|v| self.eval(v)),
        }
    }
}

impl fmt::Debug for ChannelTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Log1p => f.write_str("Log1p"),
            Self::Abs => f.write_str("Abs"),
            Self::Sqrt => f.write_str("Sqrt"),
            Self::Scale(k) => f.debug_tuple("Scale").field(k).finish(),
            Self::Clip { min, max } => f
                .debug_struct("Clip")
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_transforms() {
        assert_eq!(ChannelTransform::Identity.eval(-2.0), -2.0);
        assert_eq!(ChannelTransform::Abs.eval(-2.0), 2.0);
        assert_eq!(ChannelTransform::Sqrt.eval(9.0), 3.0);
        assert_eq!(ChannelTransform::Scale(0.5).eval(4.0), 2.0);
        assert_eq!(ChannelTransform::Log1p.eval(0.0), 0.0);
        let clip = ChannelTransform::Clip { min: 0.0, max: 1.0 };
        assert_eq!(clip.eval(-3.0), 0.0);
        assert_eq!(clip.eval(3.0), 1.0);
        assert_eq!(clip.eval(0.25), 0.25);
    }

    #[test]
    fn custom_transform_applies_per_cell() {
        let t = ChannelTransform::custom(|x| x * x);
        let r = Raster::new(1, 3, vec![1.0, -2.0, 3.0]).unwrap();
        assert_eq!(t.apply(&r).as_slice(), &[1.0, 4.0, 9.0]);
        assert_eq!(format!("{t:?}"), "Custom(..)");
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        assert!(ChannelTransform::Sqrt.eval(-1.0).is_nan());
    }
}
