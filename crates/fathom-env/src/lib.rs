//! Episodic grid-world simulator for Fathom.
//!
//! An agent moves over an immutable [`CostSurface`](fathom_core::CostSurface)
//! with one of nine discrete [`Action`]s per step. Each step pays the
//! cost of the entered cell as negative reward; the episode ends on
//! reaching the goal or after `max_steps` steps.
//!
//! [`GridWorld`] is the state machine. [`Policy`] implementations choose
//! actions from an [`Observation`], and [`rollout`] drives one full
//! episode.
//!
//! # Ownership model
//!
//! A `GridWorld` owns its agent state and shares its surface through an
//! `Arc`, so many independent worlds can be built cheaply over one
//! surface and moved to separate threads. All mutating methods take
//! `&mut self`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod config;
pub mod observation;
pub mod policy;
pub mod rollout;
pub mod world;

pub use action::Action;
pub use config::{ConfigError, GridWorldConfig};
pub use observation::{Observation, Patch};
pub use policy::{FnPolicy, GreedyPolicy, Policy, RandomPolicy};
pub use rollout::{rollout, EpisodeSummary};
pub use world::{EpisodeInfo, GridWorld, Phase, StepInfo, StepResult};
