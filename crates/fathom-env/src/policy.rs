//! Baseline policies.
//!
//! A [`Policy`] maps an [`Observation`] to an [`Action`]; the simulator
//! places no constraint on how the choice is made. Three baselines ship
//! here:
//!
//! - [`RandomPolicy`]: uniform over the 9 actions.
//! - [`GreedyPolicy`]: steps toward the cheapest of the 9 move targets
//!   visible in the local patch.
//! - [`FnPolicy`]: adapts any closure, e.g. a learned model's predict call.
//!
//! Stochastic policies use a seeded ChaCha8 RNG so rollouts replay
//! identically for identical seeds.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::action::Action;
use crate::observation::Observation;

/// Chooses an action from an observation.
pub trait Policy {
    /// Pick the next action.
    fn act(&mut self, observation: &Observation) -> Action;

    /// Called at the start of every episode. Default: no-op.
    fn reset(&mut self) {}
}

// ── RandomPolicy ────────────────────────────────────────────────

/// Samples actions uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// A random policy with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::ALL[self.rng.random_range(0..Action::COUNT)]
    }
}

// ── GreedyPolicy ────────────────────────────────────────────────

/// Moves to the lowest-cost cell among the 9 move targets in the patch.
///
/// Targets outside the patch (only possible with `patch_size == 1`) are
/// skipped. Ties are broken uniformly at random.
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    rng: ChaCha8Rng,
}

impl GreedyPolicy {
    /// A greedy policy with a fixed tie-break seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// All actions whose target has the minimum visible cost.
    pub fn best_actions(observation: &Observation) -> Vec<Action> {
        let mut best = Vec::new();
        let mut best_cost = f64::INFINITY;
        for action in Action::ALL {
            let (dr, dc) = action.offset();
            let Some(cost) = observation.local_patch.relative(dr, dc) else {
                continue;
            };
            if cost < best_cost {
                best_cost = cost;
                best.clear();
                best.push(action);
            } else if cost == best_cost {
                best.push(action);
            }
        }
        best
    }
}

impl Policy for GreedyPolicy {
    fn act(&mut self, observation: &Observation) -> Action {
        let best = Self::best_actions(observation);
        match best.choose(&mut self.rng) {
            Some(&action) => action,
            None => Action::ALL[self.rng.random_range(0..Action::COUNT)],
        }
    }
}

// ── FnPolicy ────────────────────────────────────────────────────

/// Wraps a closure as a policy.
///
/// ```
/// use fathom_env::{Action, FnPolicy, Observation, Policy};
///
/// let mut always_east = FnPolicy::new(|_: &Observation| Action::East);
/// let _: &mut dyn Policy = &mut always_east;
/// ```
pub struct FnPolicy<F> {
    f: F,
}

impl<F> FnPolicy<F>
where
    F: FnMut(&Observation) -> Action,
{
    /// Wrap `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Policy for FnPolicy<F>
where
    F: FnMut(&Observation) -> Action,
{
    fn act(&mut self, observation: &Observation) -> Action {
        (self.f)(observation)
    }
}

impl<F> std::fmt::Debug for FnPolicy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnPolicy(..)")
    }
}
