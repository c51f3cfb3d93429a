//! Test fixtures for Fathom development.
//!
//! Small, deterministic surfaces and channel stacks shared by the unit
//! and integration tests of the cost, path, env, and data crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
