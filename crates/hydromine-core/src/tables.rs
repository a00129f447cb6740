//! Upgrade-level tables and field constants.
//!
//! Parallel sequences indexed by module/ship upgrade level, frozen game
//! data. Every value is reached through a lookup function that reports an
//! out-of-range level as a [`TableError`]: a level the tables cannot
//! answer is a configuration error, never a panic.

use crate::fixed::{Fixed64, MINUTE, Seconds, f64_to_fixed64};

// ---------------------------------------------------------------------------
// Field constants
// ---------------------------------------------------------------------------

/// Number of roid slots a genrich event can fill at once.
pub const GENESIS_ROIDS: usize = 4;

/// Roid slots populated at sector entry.
pub const START_ROIDS: usize = 8;

/// Total roid slots in a hydro sector. Genesis unlocks slots beyond
/// [`START_ROIDS`] but never resizes past this.
pub const MAX_ROIDS: usize = 14;

/// Hydro ceiling for a single roid. Enrichment clamps here.
pub const ROID_HYDRO_CAP: u32 = 1500;

/// Hydro ceiling for the whole field: every slot at the roid cap.
pub const FIELD_HYDRO_CAP: u32 = ROID_HYDRO_CAP * MAX_ROIDS as u32;

/// Remote Mining's level value divided by this gives its speed multiplier.
pub const REMOTE_TARGET_DIVISOR: u32 = 4;

/// Base cooldown between genrich events, before any configured extra lag.
pub const GENRICH_BASE_INTERVAL: Seconds = 5 * MINUTE;

// ---------------------------------------------------------------------------
// Level tables
// ---------------------------------------------------------------------------

// Mining modules
const GENESIS_YIELD: [u32; 16] = [
    0, 120, 160, 200, 240, 280, 320, 400, 480, 560, 640, 720, 800, 1000, 1200, 1400,
];
// Converted to fixed point at lookup (initialization-time only).
const ENRICH_MULTIPLIER: [f64; 16] = [
    1.0, 1.08, 1.16, 1.24, 1.32, 1.4, 1.48, 1.64, 1.8, 1.96, 2.28, 2.6, 2.92, 3.24, 3.56, 4.2,
];
const ARTIFACT_BOOST_COST: [u32; 16] = [
    0, 10, 20, 30, 40, 60, 150, 250, 400, 550, 800, 1000, 1200, 1400, 1600, 2000,
];
const MINING_BOOST: [f64; 16] = [
    1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 7.0, 8.0, 9.0, 10.0,
];
const REMOTE_MINING_TARGETS: [u32; 16] = [0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16, 20];

// Miner hulls
const MINER_SPEED: [f64; 8] = [0.0, 6.0, 7.5, 12.0, 24.0, 60.0, 80.0, 92.3];
const MINER_TANK: [u32; 8] = [0, 20, 200, 400, 800, 1200, 1600, 2000];

// Total sector hydro by red star tier. Tiers below 7 carry no hydro sector.
const SECTOR_STARTING_HYDRO: [u32; 13] = [0, 0, 0, 0, 0, 0, 0, 400, 500, 600, 700, 800, 900];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// A level with no entry in one of the upgrade tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{table} has no entry for level {level} (valid through {max})")]
pub struct TableError {
    pub table: &'static str,
    pub level: usize,
    pub max: usize,
}

fn lookup<T: Copy>(table: &'static str, values: &[T], level: usize) -> Result<T, TableError> {
    values.get(level).copied().ok_or(TableError {
        table,
        level,
        max: values.len() - 1,
    })
}

/// Hydro added to the field per genrich event.
pub fn genesis_yield(level: usize) -> Result<u32, TableError> {
    lookup("genesis", &GENESIS_YIELD, level)
}

/// Multiplier applied to every roid per genrich event.
pub fn enrich_multiplier(level: usize) -> Result<Fixed64, TableError> {
    lookup("enrich", &ENRICH_MULTIPLIER, level).map(f64_to_fixed64)
}

/// Hydro spent per miner per artifact boost.
pub fn artifact_boost_cost(level: usize) -> Result<u32, TableError> {
    lookup("artifact boost", &ARTIFACT_BOOST_COST, level)
}

/// Mining speed multiplier from the Mining Boost module.
pub fn mining_boost(level: usize) -> Result<Fixed64, TableError> {
    lookup("mining boost", &MINING_BOOST, level).map(f64_to_fixed64)
}

/// Number of roids mined concurrently at a Remote Mining level.
pub fn remote_targets(level: usize) -> Result<u32, TableError> {
    lookup("remote mining", &REMOTE_MINING_TARGETS, level)
}

/// Base mining speed of a miner hull, in hydro per minute.
pub fn miner_speed(level: usize) -> Result<Fixed64, TableError> {
    lookup("miner speed", &MINER_SPEED, level).map(f64_to_fixed64)
}

/// Tank capacity of a miner hull.
pub fn miner_tank(level: usize) -> Result<u32, TableError> {
    lookup("miner tank", &MINER_TANK, level)
}

/// Total hydro a sector starts with at a given red star tier.
pub fn starting_hydro(tier: usize) -> Result<u32, TableError> {
    lookup("starting hydro", &SECTOR_STARTING_HYDRO, tier)
}
