//! Run configuration: the external input form and its resolved,
//! immutable derivation.
//!
//! Follows a validate-then-freeze lifecycle: [`SimInput`] is the mutable
//! form an external collaborator fills in (selections stay `None` until
//! chosen), and [`RunConfig::from_input`] performs every table lookup and
//! rate derivation exactly once. A `RunConfig` never changes after
//! construction; everything downstream reads it by value.

use serde::{Deserialize, Serialize};

use crate::fixed::{Fixed64, MINUTE, Seconds};
use crate::tables::{self, GENRICH_BASE_INTERVAL, REMOTE_TARGET_DIVISOR, ROID_HYDRO_CAP, TableError};

/// Tick lengths the simulation supports, in seconds.
pub const SUPPORTED_TICK_LENGTHS: [Seconds; 3] = [5, 10, 20];

/// Latest minute at which the first genrich may be scheduled.
pub const MAX_GENRICH_START_MIN: u32 = 9;

// ---------------------------------------------------------------------------
// Input form
// ---------------------------------------------------------------------------

/// Raw selections and tuning knobs, as collected by an external caller.
///
/// The nine level/count selections are optional; an incomplete form is the
/// caller's "nothing chosen yet" state and resolving it is a silent no-op,
/// not an error. The tuning knobs always carry values; `Default` gives an
/// entirely-unselected form with standard tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimInput {
    /// Red star tier, 7..=12 for sectors that carry hydro.
    pub drs_level: Option<u8>,
    pub genesis_level: Option<u8>,
    pub enrich_level: Option<u8>,
    pub artifact_boost_level: Option<u8>,
    pub mining_boost_level: Option<u8>,
    pub remote_level: Option<u8>,
    pub miner_level: Option<u8>,
    pub miner_count: Option<u32>,
    /// Target number of artifact boosts.
    pub boost_goal: Option<u32>,
    /// Minute of the run at which the first genrich fires.
    pub genrich_start_min: Option<u32>,

    /// Simulation tick length in seconds. One of [`SUPPORTED_TICK_LENGTHS`].
    pub tick_len: Seconds,
    /// Extra seconds added to the base genrich cooldown.
    pub genrich_lag: Seconds,
    /// Seconds after an artifact boost before mining resumes.
    pub boost_lag: Seconds,
    /// Seconds of post-goal ticking while the fleet flies out.
    pub exit_duration: Seconds,
}

impl Default for SimInput {
    fn default() -> Self {
        Self {
            drs_level: None,
            genesis_level: None,
            enrich_level: None,
            artifact_boost_level: None,
            mining_boost_level: None,
            remote_level: None,
            miner_level: None,
            miner_count: None,
            boost_goal: None,
            genrich_start_min: None,
            tick_len: 10,
            genrich_lag: 0,
            boost_lag: 0,
            exit_duration: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution errors
// ---------------------------------------------------------------------------

/// Why an input form could not be resolved into a [`RunConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more required selections are still `None`. Callers treat
    /// this as "not ready yet", not as a failure.
    #[error("one or more required selections are missing")]
    Incomplete,
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("unsupported tick length: {0}s (expected 5, 10 or 20)")]
    UnsupportedTickLength(Seconds),
    #[error("miner count must be at least 1")]
    EmptyFleet,
    #[error("boost goal must be at least 1")]
    ZeroBoostGoal,
    #[error("first genrich must start within minutes 0-9, got {0}")]
    GenrichStartOutOfRange(u32),
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// A fully resolved, immutable run configuration.
///
/// Every field is a pure function of the input form and the level tables,
/// computed once. Rates are per tick; times are absolute seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub tick_len: Seconds,
    pub miner_count: u32,
    pub boost_goal: u32,

    /// Total hydro the sector starts with.
    pub starting_hydro: u32,
    /// Hydro added to the field per genrich event.
    pub genesis_yield: u32,
    /// Multiplier applied to every roid per genrich event.
    pub enrich_multiplier: Fixed64,
    /// Hydro spent per miner per artifact boost.
    pub boost_cost: u32,
    /// Combined fleet mining speed, in hydro per tick.
    pub mining_rate: Fixed64,
    /// Roids mined concurrently.
    pub max_targets: usize,
    /// Tank capacity per miner.
    pub tank_capacity: u32,

    /// Absolute time of the first genrich.
    pub genrich_start: Seconds,
    /// Cooldown between genrich events (base interval plus extra lag).
    pub genrich_interval: Seconds,
    /// Seconds after an artifact boost before mining resumes.
    pub boost_lag: Seconds,
    /// Seconds of post-goal ticking while the fleet flies out.
    pub exit_duration: Seconds,

    /// Roid amount above which the next enrich saturates at the roid cap:
    /// `floor(cap / multiplier)`. Exposed for chart annotation.
    pub re_enrich_threshold: u32,
}

impl RunConfig {
    /// Resolve an input form.
    ///
    /// Fails with [`ConfigError::Incomplete`] while any selection is
    /// missing; all other variants are genuine configuration errors.
    pub fn from_input(input: &SimInput) -> Result<Self, ConfigError> {
        let (
            Some(drs),
            Some(genesis),
            Some(enrich),
            Some(artifact_boost),
            Some(mining_boost),
            Some(remote),
            Some(miner),
            Some(miner_count),
            Some(boost_goal),
            Some(genrich_start_min),
        ) = (
            input.drs_level,
            input.genesis_level,
            input.enrich_level,
            input.artifact_boost_level,
            input.mining_boost_level,
            input.remote_level,
            input.miner_level,
            input.miner_count,
            input.boost_goal,
            input.genrich_start_min,
        )
        else {
            return Err(ConfigError::Incomplete);
        };

        if !SUPPORTED_TICK_LENGTHS.contains(&input.tick_len) {
            return Err(ConfigError::UnsupportedTickLength(input.tick_len));
        }
        if miner_count == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        if boost_goal == 0 {
            return Err(ConfigError::ZeroBoostGoal);
        }
        if genrich_start_min > MAX_GENRICH_START_MIN {
            return Err(ConfigError::GenrichStartOutOfRange(genrich_start_min));
        }

        let enrich_multiplier = tables::enrich_multiplier(enrich as usize)?;
        let max_targets = tables::remote_targets(remote as usize)? as usize;

        // Speed × boost × concurrent targets ÷ 4, summed over the fleet,
        // rescaled from hydro/min to hydro/tick.
        let mining_rate = tables::miner_speed(miner as usize)?
            * tables::mining_boost(mining_boost as usize)?
            * Fixed64::from_num(max_targets as u32)
            / Fixed64::from_num(REMOTE_TARGET_DIVISOR)
            * Fixed64::from_num(miner_count)
            / Fixed64::from_num(MINUTE as u32)
            * Fixed64::from_num(input.tick_len as u32);

        let re_enrich_threshold = (Fixed64::from_num(ROID_HYDRO_CAP) / enrich_multiplier)
            .floor()
            .to_num::<u32>();

        Ok(Self {
            tick_len: input.tick_len,
            miner_count,
            boost_goal,
            starting_hydro: tables::starting_hydro(drs as usize)?,
            genesis_yield: tables::genesis_yield(genesis as usize)?,
            enrich_multiplier,
            boost_cost: tables::artifact_boost_cost(artifact_boost as usize)?,
            mining_rate,
            max_targets,
            tank_capacity: tables::miner_tank(miner as usize)?,
            genrich_start: genrich_start_min as Seconds * MINUTE,
            genrich_interval: GENRICH_BASE_INTERVAL + input.genrich_lag,
            boost_lag: input.boost_lag,
            exit_duration: input.exit_duration,
            re_enrich_threshold,
        })
    }
}
