//! The grid-world state machine.
//!
//! ```text
//! Uninitialized --reset--> Ready --step--> Stepping --step--> ... --> Terminated
//!                           ^                                             |
//!                           +------------------- reset -------------------+
//! ```
//!
//! `reset` is legal from every phase. `step` is legal only from Ready or
//! Stepping; calling it from Uninitialized or Terminated is a caller
//! error reported through [`EnvError`].

use std::fmt;
use std::sync::Arc;

use fathom_core::{Cell, CostSurface, EnvError};
use fathom_space::{EdgeBehavior, Square8};
use tracing::{debug, trace};

use crate::action::Action;
use crate::config::{ConfigError, GridWorldConfig};
use crate::observation::{Observation, Patch};

// Compile-time assertion: GridWorld can be moved to another thread for
// parallel rollouts.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GridWorld>();
    }
};

// ── Phase ───────────────────────────────────────────────────────

/// Lifecycle phase of a [`GridWorld`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, never reset.
    Uninitialized,
    /// Reset, no step taken yet.
    Ready,
    /// At least one step taken, episode still running.
    Stepping,
    /// Episode ended; only `reset` is accepted.
    Terminated,
}

// ── Results ─────────────────────────────────────────────────────

/// Episode metadata returned by [`GridWorld::reset()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeInfo {
    /// Start cell.
    pub start: Cell,
    /// Goal cell.
    pub goal: Cell,
}

/// Per-step diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInfo {
    /// Cost of the cell entered on this step.
    pub cell_cost: f64,
    /// `Some(true)` if the goal was reached, `Some(false)` if the step
    /// limit ended the episode, `None` while the episode continues.
    pub success: Option<bool>,
}

/// Result of a successful [`GridWorld::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// Observation after the move.
    pub observation: Observation,
    /// Negative cost of the entered cell.
    pub reward: f64,
    /// Whether the episode has ended.
    pub done: bool,
    /// Always `false`; the step limit is reported through `done`.
    pub truncated: bool,
    /// Cell cost and termination outcome.
    pub info: StepInfo,
}

// ── GridWorld ───────────────────────────────────────────────────

/// Single-agent episodic simulator over a cost surface.
///
/// Created from a [`GridWorldConfig`] via [`new()`](GridWorld::new).
///
/// # Example
///
/// ```
/// use fathom_core::{Cell, CostSurface};
/// use fathom_env::{Action, GridWorld, GridWorldConfig};
///
/// let surface = CostSurface::from_vec(3, 3, vec![0.5; 9]).unwrap();
/// let cfg = GridWorldConfig::new(surface, Cell::new(0, 0), Cell::new(1, 1));
/// let mut world = GridWorld::new(cfg).unwrap();
/// world.reset();
/// let result = world.step(Action::SouthEast).unwrap();
/// assert!(result.done);
/// assert_eq!(result.reward, -0.5);
/// ```
#[derive(Clone, Debug)]
pub struct GridWorld {
    surface: Arc<CostSurface>,
    space: Square8,
    start: Cell,
    goal: Cell,
    patch_size: usize,
    max_steps: usize,
    phase: Phase,
    agent: Cell,
    step_count: usize,
    last_reward: f64,
}

impl GridWorld {
    /// Validate `config` and build a world in the Uninitialized phase.
    pub fn new(config: GridWorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let max_steps = config.resolved_max_steps();
        let (rows, cols) = config.surface.shape();
        let space = Square8::new(rows, cols, EdgeBehavior::Clamp)?;
        Ok(Self {
            surface: config.surface,
            space,
            start: config.start,
            goal: config.goal,
            patch_size: config.patch_size,
            max_steps,
            phase: Phase::Uninitialized,
            agent: config.start,
            step_count: 0,
            last_reward: 0.0,
        })
    }

    /// Start a new episode at the configured start cell.
    pub fn reset(&mut self) -> (Observation, EpisodeInfo) {
        self.agent = self.start;
        self.step_count = 0;
        self.last_reward = 0.0;
        self.phase = Phase::Ready;
        debug!(start = %self.start, goal = %self.goal, max_steps = self.max_steps, "episode reset");
        (
            self.observation(),
            EpisodeInfo {
                start: self.start,
                goal: self.goal,
            },
        )
    }

    /// Apply `action` and advance one step.
    ///
    /// The target cell is clamped to the grid, so a move off the edge
    /// leaves the agent on the boundary. The reward is the negative cost
    /// of the entered cell. Reaching the goal takes priority over the
    /// step limit when both happen on the same step.
    ///
    /// # Errors
    ///
    /// [`EnvError::NotReset`] before the first `reset`,
    /// [`EnvError::EpisodeTerminated`] after the episode has ended.
    pub fn step(&mut self, action: Action) -> Result<StepResult, EnvError> {
        match self.phase {
            Phase::Uninitialized => return Err(EnvError::NotReset),
            Phase::Terminated => return Err(EnvError::EpisodeTerminated),
            Phase::Ready | Phase::Stepping => {}
        }

        let (dr, dc) = action.offset();
        let target = self.space.resolve(self.agent, dr, dc).unwrap_or(self.agent);
        self.agent = target;
        self.step_count += 1;

        let cell_cost = self.surface.at(target.row, target.col);
        let reward = -cell_cost;
        self.last_reward = reward;

        let success = if target == self.goal {
            Some(true)
        } else if self.step_count >= self.max_steps {
            Some(false)
        } else {
            None
        };
        let done = success.is_some();
        self.phase = if done {
            Phase::Terminated
        } else {
            Phase::Stepping
        };

        trace!(step = self.step_count, %action, agent = %target, reward, "step");
        if let Some(success) = success {
            debug!(steps = self.step_count, success, "episode terminated");
        }

        Ok(StepResult {
            observation: self.observation(),
            reward,
            done,
            truncated: false,
            info: StepInfo { cell_cost, success },
        })
    }

    /// Like [`step()`](GridWorld::step) but takes a raw action code.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidAction`] for codes outside `0..=8`, checked
    /// before any state changes.
    pub fn step_code(&mut self, code: u8) -> Result<StepResult, EnvError> {
        let action = Action::try_from(code)?;
        self.step(action)
    }

    /// Observation at the agent's current position.
    pub fn observation(&self) -> Observation {
        Observation {
            local_patch: Patch::extract(&self.surface, &self.space, self.agent, self.patch_size),
            agent_pos: self.agent,
            goal_pos: self.goal,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current agent position.
    pub fn agent_pos(&self) -> Cell {
        self.agent
    }

    /// Configured start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Configured goal cell.
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Steps taken in the current episode.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Step limit per episode.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Reward of the most recent step, `0.0` right after `reset`.
    pub fn last_reward(&self) -> f64 {
        self.last_reward
    }

    /// Observation patch side length.
    pub fn patch_size(&self) -> usize {
        self.patch_size
    }

    /// The shared cost surface.
    pub fn surface(&self) -> &Arc<CostSurface> {
        &self.surface
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} | Agent: {} | Last reward: {:.4}",
            self.step_count, self.agent, self.last_reward
        )
    }
}
