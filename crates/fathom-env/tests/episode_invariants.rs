//! Integration test: episode invariants hold for arbitrary action
//! sequences on randomized surfaces.

use std::sync::Arc;

use fathom_core::Cell;
use fathom_env::{rollout, Action, GreedyPolicy, GridWorld, GridWorldConfig, Phase};
use fathom_test_utils::{seeded_surface, spike_surface};
use proptest::prelude::*;

// ── Shared surface ───────────────────────────────────────────────────

#[test]
fn worlds_share_one_surface() {
    let surface = Arc::new(seeded_surface(6, 6, 11));
    let world = |start, goal| {
        GridWorld::new(GridWorldConfig::new(surface.clone(), start, goal)).unwrap()
    };
    let mut a = world(Cell::new(0, 0), Cell::new(5, 5));
    let mut b = world(Cell::new(5, 5), Cell::new(0, 0));
    assert_eq!(Arc::strong_count(&surface), 3);
    a.reset();
    b.reset();
    a.step(Action::South).unwrap();
    assert_eq!(b.agent_pos(), Cell::new(5, 5));
    assert!(Arc::ptr_eq(a.surface(), b.surface()));
}

#[test]
fn greedy_avoids_spike_next_to_start() {
    // Spike directly south-east of the start; greedy never steps onto it.
    let surface = spike_surface(5, 5, Cell::new(1, 1), 1.0);
    let cfg = GridWorldConfig::new(surface, Cell::new(0, 0), Cell::new(4, 4)).with_max_steps(20);
    let mut world = GridWorld::new(cfg).unwrap();
    let summary = rollout(&mut world, &mut GreedyPolicy::new(5)).unwrap();
    assert!(!summary.trajectory.contains(&Cell::new(1, 1)));
    assert_eq!(summary.total_reward, 0.0);
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn steps_stay_in_bounds_and_pay_cell_cost(
        seed in any::<u64>(),
        rows in 1usize..8,
        cols in 1usize..8,
        codes in prop::collection::vec(0u8..9, 1..40),
        patch in prop::sample::select(vec![1usize, 3, 5]),
    ) {
        let surface = seeded_surface(rows, cols, seed);
        let goal = Cell::new(rows - 1, cols - 1);
        let cfg = GridWorldConfig::new(surface.clone(), Cell::new(0, 0), goal)
            .with_patch_size(patch);
        let mut world = GridWorld::new(cfg).unwrap();
        world.reset();
        let mut prev = world.agent_pos();
        for code in codes {
            if world.phase() == Phase::Terminated {
                world.reset();
                prev = world.agent_pos();
            }
            let r = world.step_code(code).unwrap();
            let pos = r.observation.agent_pos;
            prop_assert!(pos.row < rows && pos.col < cols);
            prop_assert!(pos == prev || pos.is_adjacent8(prev));
            prop_assert_eq!(r.reward, -surface.cost(pos).unwrap());
            prop_assert_eq!(r.info.cell_cost, surface.cost(pos).unwrap());
            prop_assert_eq!(r.observation.local_patch.shape(), (1, patch, patch));
            prop_assert_eq!(r.observation.local_patch.relative(0, 0), surface.cost(pos));
            prop_assert!(!r.truncated);
            prop_assert_eq!(r.done, r.info.success.is_some());
            if r.done {
                prop_assert_eq!(r.info.success, Some(pos == goal));
            }
            prev = pos;
        }
    }

    #[test]
    fn step_count_never_exceeds_limit(max_steps in 1usize..20, seed in any::<u64>()) {
        let surface = seeded_surface(5, 5, seed);
        let cfg = GridWorldConfig::new(surface, Cell::new(2, 2), Cell::new(0, 0))
            .with_max_steps(max_steps);
        let mut world = GridWorld::new(cfg).unwrap();
        world.reset();
        let mut n = 0;
        loop {
            let r = world.step(Action::Stay).unwrap();
            n += 1;
            if r.done {
                break;
            }
        }
        prop_assert_eq!(n, max_steps);
        prop_assert!(world.step(Action::Stay).is_err());
    }
}
