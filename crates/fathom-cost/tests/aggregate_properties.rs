//! Integration test: aggregated surfaces keep shape, stay in `[0, 1]`,
//! and reach exactly 1 unless degenerate.

use fathom_core::{ChannelStack, CostError, Raster};
use fathom_cost::{aggregate_cost, ChannelTransform, ClipPercentiles, CostAggregator};
use fathom_test_utils::seeded_stack;
use proptest::prelude::*;

#[test]
fn mismatched_transforms_fail_before_work() {
    let stack = seeded_stack(3, 4, 4, 5.0, 1);
    let transforms = [ChannelTransform::Abs, ChannelTransform::Identity];
    let err = aggregate_cost(&stack, &[1.0, 1.0, 1.0], Some(&transforms[..]), 0.0).unwrap_err();
    assert_eq!(
        err,
        CostError::TransformCount {
            channels: 3,
            transforms: 2
        }
    );
}

#[test]
fn aggregator_is_reusable_across_stacks() {
    let agg = CostAggregator::builder()
        .weights([1.0, 0.8, 0.3, 0.5])
        .smooth_sigma(1.0)
        .build()
        .unwrap();
    for seed in 0..4 {
        let surface = agg.aggregate(&seeded_stack(4, 12, 10, 3.0, seed)).unwrap();
        assert_eq!(surface.shape(), (12, 10));
        assert!((surface.max_cost() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn raw_min_max_normalization_is_selectable() {
    let ch = Raster::new(1, 4, vec![0.0, 1.0, 2.0, 100.0]).unwrap();
    let stack = ChannelStack::new(vec![ch]).unwrap();
    let raw = CostAggregator::builder()
        .weights([1.0])
        .clip_percentiles(None)
        .build()
        .unwrap()
        .aggregate(&stack)
        .unwrap();
    assert_eq!(raw.as_slice(), &[0.0, 0.01, 0.02, 1.0]);
    let clipped = CostAggregator::builder()
        .weights([1.0])
        .clip_percentiles(Some(ClipPercentiles::new(0.0, 50.0).unwrap()))
        .build()
        .unwrap()
        .aggregate(&stack)
        .unwrap();
    // p50 = 1.5, so the top two cells saturate.
    assert_eq!(clipped.as_slice()[2], 1.0);
    assert_eq!(clipped.as_slice()[3], 1.0);
}

proptest! {
    #[test]
    fn surface_is_bounded_and_shaped(
        channels in 1usize..5,
        rows in 1usize..10,
        cols in 1usize..10,
        sigma in 0.0f64..3.0,
        seed in any::<u64>(),
        raw_weights in prop::collection::vec(0.0f64..2.0, 5),
    ) {
        let stack = seeded_stack(channels, rows, cols, 10.0, seed);
        let weights = &raw_weights[..channels];
        let surface = aggregate_cost(&stack, weights, None, sigma).unwrap();
        prop_assert_eq!(surface.shape(), (rows, cols));
        prop_assert!(surface.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
        let max = surface.max_cost();
        prop_assert!(max == 0.0 || (max - 1.0).abs() < 1e-12);
    }
}
