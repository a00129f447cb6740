//! Shared scenario constructors for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these
//! helpers are available in unit tests, integration tests, and benchmarks
//! (via the `test-utils` feature).

use crate::config::SimInput;
use crate::fixed::Fixed64;

pub fn fixed(v: f64) -> Fixed64 {
    Fixed64::from_num(v)
}

/// A complete form with every selection made; the starting point the
/// scenario constructors below tweak.
fn complete(drs: u8) -> SimInput {
    SimInput {
        drs_level: Some(drs),
        genesis_level: Some(13),
        enrich_level: Some(11),
        artifact_boost_level: Some(13),
        mining_boost_level: Some(11),
        remote_level: Some(9),
        miner_level: Some(6),
        miner_count: Some(2),
        boost_goal: Some(18),
        genrich_start_min: Some(2),
        ..SimInput::default()
    }
}

/// The reference mid-range loadout: a tier-10 sector (700 hydro), two
/// level-6 miners, 18 boosts targeted, 10 s ticks.
pub fn baseline_input() -> SimInput {
    complete(10)
}

/// Maximal throughput chasing a single boost: finds a near-zero delay.
pub fn rush_input() -> SimInput {
    SimInput {
        drs_level: Some(12),
        artifact_boost_level: Some(1),
        mining_boost_level: Some(15),
        remote_level: Some(15),
        miner_level: Some(7),
        miner_count: Some(4),
        boost_goal: Some(1),
        ..complete(12)
    }
}

/// A sector without hydro and a fleet without throughput: every rate and
/// target count resolves to zero.
pub fn barren_input() -> SimInput {
    SimInput {
        drs_level: Some(0),
        genesis_level: Some(0),
        enrich_level: Some(0),
        artifact_boost_level: Some(1),
        mining_boost_level: Some(0),
        remote_level: Some(0),
        miner_level: Some(0),
        miner_count: Some(1),
        boost_goal: Some(1),
        genrich_start_min: Some(0),
        ..SimInput::default()
    }
}

/// A starved sector that drains on every attempt: a small tier-7 field,
/// weak genesis and enrich, heavy draining. Exhausts the delay budget.
pub fn starved_input() -> SimInput {
    SimInput {
        drs_level: Some(7),
        genesis_level: Some(1),
        enrich_level: Some(1),
        artifact_boost_level: Some(15),
        mining_boost_level: Some(15),
        remote_level: Some(15),
        miner_level: Some(7),
        miner_count: Some(4),
        boost_goal: Some(25),
        ..complete(7)
    }
}
