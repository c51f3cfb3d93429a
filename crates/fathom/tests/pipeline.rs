//! End-to-end: channels in, surface out, then the same surface planned
//! offline and walked online.

use fathom::prelude::*;
use fathom_test_utils::{seeded_stack, spike_surface};
use proptest::prelude::*;

#[test]
fn spike_is_routed_around() {
    let surface = spike_surface(5, 5, Cell::new(2, 2), 10.0);
    let (start, goal) = (Cell::new(0, 0), Cell::new(4, 4));

    let planner = Planner::new(Algorithm::AStar(Heuristic::Manhattan));
    let result = planner.plan(&surface, start, goal).unwrap();
    let path = result.path.as_ref().unwrap();

    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(!path.contains(&Cell::new(2, 2)));
    assert_eq!(result.total_cost, 0.0);

    let diagonal: Vec<Cell> = (0..5).map(|i| Cell::new(i, i)).collect();
    let through_spike = path_cost(&surface, &diagonal).unwrap();
    assert!(result.total_cost < through_spike);
}

#[test]
fn dijkstra_and_astar_agree_on_aggregated_surface() {
    let stack = seeded_stack(3, 12, 15, 5.0, 21);
    let surface = aggregate_cost(&stack, &[1.0, 0.5, 2.0], None, 1.0).unwrap();
    let (start, goal) = (Cell::new(0, 0), Cell::new(11, 14));

    let d = Planner::new(Algorithm::Dijkstra).plan(&surface, start, goal).unwrap();
    let a = Planner::new(Algorithm::AStar(Heuristic::Zero))
        .plan(&surface, start, goal)
        .unwrap();
    assert!(d.is_found());
    assert!((d.total_cost - a.total_cost).abs() < 1e-9);
    let recomputed = path_cost(&surface, d.path.as_deref().unwrap()).unwrap();
    assert!((recomputed - d.total_cost).abs() < 1e-9);
}

#[test]
fn planned_path_replays_in_the_world() {
    let stack = seeded_stack(2, 8, 8, 1.0, 4);
    let surface = aggregate_cost(&stack, &[1.0, 1.0], None, 0.0).unwrap();
    let (start, goal) = (Cell::new(0, 0), Cell::new(7, 7));
    let plan = Planner::default().plan(&surface, start, goal).unwrap();
    let path = plan.path.unwrap();

    let expected_reward: f64 = path[1..].iter().map(|&c| -surface.cost(c).unwrap()).sum();
    let mut world = GridWorld::new(GridWorldConfig::new(surface, start, goal)).unwrap();
    world.reset();
    let mut total_reward = 0.0;
    let mut last = None;
    for pair in path.windows(2) {
        let dr = pair[1].row as i64 - pair[0].row as i64;
        let dc = pair[1].col as i64 - pair[0].col as i64;
        let action = Action::ALL
            .into_iter()
            .find(|a| a.offset() == (dr, dc))
            .unwrap();
        let step = world.step(action).unwrap();
        assert_eq!(step.observation.agent_pos, pair[1]);
        total_reward += step.reward;
        last = Some(step);
    }
    let last = last.unwrap();
    assert!(last.done);
    assert_eq!(last.info.success, Some(true));
    assert_eq!(world.step_count(), path.len() - 1);
    // Each step charges the destination cell.
    assert!((total_reward - expected_reward).abs() < 1e-12);
}

#[test]
fn loaded_environment_runs_both_baselines() {
    let factory = load_environment(&LoaderConfig::standalone(), &MemoryReader::new()).unwrap();
    let policies: Vec<Box<dyn Policy>> =
        vec![Box::new(GreedyPolicy::new(1)), Box::new(RandomPolicy::new(1))];
    for mut policy in policies {
        let mut world = factory.make().unwrap();
        let summary = rollout(&mut world, policy.as_mut()).unwrap();
        assert!(summary.steps <= world.max_steps());
        assert!(summary.total_reward <= 0.0);
        assert_eq!(summary.trajectory.len(), summary.steps + 1);
    }
}

proptest! {
    #[test]
    fn optimal_cost_never_exceeds_straight_line_route(seed in 0u64..500) {
        let stack = seeded_stack(2, 6, 6, 3.0, seed);
        let surface = aggregate_cost(&stack, &[1.0, 1.0], None, 0.0).unwrap();
        let diagonal: Vec<Cell> = (0..6).map(|i| Cell::new(i, i)).collect();
        let bound = path_cost(&surface, &diagonal).unwrap();
        let result = Planner::default()
            .plan(&surface, Cell::new(0, 0), Cell::new(5, 5))
            .unwrap();
        prop_assert!(result.total_cost <= bound + 1e-9);
    }
}
