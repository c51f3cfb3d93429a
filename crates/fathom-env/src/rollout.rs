//! Full-episode driver.

use fathom_core::{Cell, EnvError};
use tracing::info;

use crate::policy::Policy;
use crate::world::GridWorld;

/// Outcome of one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// Steps taken.
    pub steps: usize,
    /// Sum of step rewards (the negative total cost paid).
    pub total_reward: f64,
    /// Whether the goal was reached.
    pub success: bool,
    /// Agent positions from start to final cell, one per step plus the start.
    pub trajectory: Vec<Cell>,
}

/// Reset `world` and `policy`, then step until the episode terminates.
///
/// Always terminates: the world enforces its step limit.
pub fn rollout(world: &mut GridWorld, policy: &mut dyn Policy) -> Result<EpisodeSummary, EnvError> {
    policy.reset();
    let (mut observation, episode) = world.reset();
    let mut trajectory = vec![episode.start];
    let mut total_reward = 0.0;

    loop {
        let action = policy.act(&observation);
        let result = world.step(action)?;
        total_reward += result.reward;
        trajectory.push(result.observation.agent_pos);
        observation = result.observation;
        if let Some(success) = result.info.success {
            let summary = EpisodeSummary {
                steps: world.step_count(),
                total_reward,
                success,
                trajectory,
            };
            info!(
                steps = summary.steps,
                total_reward = summary.total_reward,
                success = summary.success,
                "rollout finished"
            );
            return Ok(summary);
        }
    }
}
