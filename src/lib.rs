//! Brainiac - gamification engine for the Brainiac learning platform
//!
//! Brainiac tracks per-learner XP, derived levels, daily streaks, badges and
//! a linear learning path of lessons with unlock dependencies, and derives
//! a top-10 leaderboard plus class-level reports for teachers. All state
//! lives in a single JSON blob (`~/.brainiac/state.json` by default) behind
//! a pluggable store.
//!
//! ## Entry points
//!
//! 1. **Engine (library)**: [`engine::Engine`] is the single authority for
//!    all mutations. UI layers (the CLI here, the web portal in production)
//!    call its operations and subscribe to [`GamificationEvent`]s.
//!
//! 2. **CLI (binary)**: `brainiac summary`, `brainiac quiz physics-1 ...`
//!    and friends drive the engine the way the portal's event handlers do.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod report;
pub mod session;
pub mod store;

pub use domain::*;
pub use engine::{Engine, EngineError};
