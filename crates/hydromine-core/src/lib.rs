//! Hydromine Core -- the mining simulation engine for Dark Red Star
//! hydro sectors.
//!
//! This crate models a fleet of miners depleting a finite, periodically
//! regenerated roid field, and searches for the smallest mining delay that
//! still reaches a target number of artifact boosts before the simulation
//! clock runs out.
//!
//! # Run Pipeline
//!
//! One call to [`simulation::Simulation::run`] drives:
//!
//! 1. **Resolve** -- the input form's levels become an immutable
//!    [`config::RunConfig`] of derived rates and durations.
//! 2. **Prime** -- the strategy advances to the configured start and fires
//!    two genrich events one cooldown apart, then freezes field, clock and
//!    logs as the base checkpoint.
//! 3. **Search** -- the checkpoint is replayed with mining delays rising
//!    one tick at a time (up to twice the genrich interval). An attempt
//!    that fully drains some roid retries with a longer delay; running out
//!    the 40-minute clock fails the whole search.
//! 4. **Report** -- the per-tick progress and field logs, the achieved
//!    delay, and the validity flag are exposed for chart consumers.
//!
//! # Key Types
//!
//! - [`simulation::Simulation`] -- facade binding an input form and seed
//!   to a strategy.
//! - [`strategy::ContinuousMining`] -- the one concrete mining policy.
//! - [`field::HydroField`] -- capacity-bounded roids with targeted
//!   draining and genrich regeneration.
//! - [`config::RunConfig`] -- resolved, immutable rates and durations.
//! - [`tables`] -- frozen upgrade-level game data.
//! - [`fixed::Fixed64`] -- Q32.32 fixed-point type for deterministic math.
//! - [`rng::SimRng`] -- seedable generator for the initial roid sizes, the
//!   only randomness in a run.

pub mod config;
pub mod field;
pub mod fixed;
pub mod report;
pub mod rng;
pub mod simulation;
pub mod strategy;
pub mod tables;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
