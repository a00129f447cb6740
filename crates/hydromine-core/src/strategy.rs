//! Mining strategies and the embedded delay search.
//!
//! A strategy orchestrates one [`HydroField`] and one [`RunConfig`] across
//! simulated time, producing the per-tick progress and field logs. The one
//! concrete policy, [`ContinuousMining`], performs a one-time field setup
//! (advance to the configured start, two priming genrich events), freezes
//! that state as a checkpoint, then replays from the checkpoint with
//! increasing mining delays until the boost goal is met or a ceiling is
//! hit.
//!
//! The delay schedule is exhaustive: one tick at a time up to twice the
//! genrich interval. The delay/success relationship is not reliably
//! monotonic, so the search never bisects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::field::HydroField;
use crate::fixed::{Fixed64, MINUTE, Seconds};
use crate::report::{self, FieldRow, FieldSample, ProgressRow};
use crate::rng::SimRng;

/// Hard ceiling on simulated time. Running out of clock is fatal for the
/// whole search, not just the current delay attempt.
pub const MAX_SIM_TIME: Seconds = 40 * MINUTE;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// What the fleet is doing at a given tick. Logged in every progress row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiningStatus {
    Clearing,
    Genrich,
    Mining,
    Waiting,
    Exiting,
}

impl fmt::Display for MiningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MiningStatus::Clearing => "Clearing cerbs from hydro sector(s)",
            MiningStatus::Genrich => "Waiting for genrich cooldown",
            MiningStatus::Mining => "Mining the hydro sector(s)",
            MiningStatus::Waiting => "Waiting to restart mining",
            MiningStatus::Exiting => "Flying to jump gate",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Strategy interface
// ---------------------------------------------------------------------------

/// A mining policy. One `run` drives the full delay search; the readers
/// expose the logs and the delay the search settled on.
pub trait MiningStrategy: fmt::Debug {
    /// Execute the delay search. True iff the boost goal was reached within
    /// the simulation time ceiling at some delay within the delay budget.
    /// On failure the logs hold the final (highest-delay) attempt only.
    fn run(&mut self) -> bool;

    /// The aggregate progress table.
    fn mining_progress(&self) -> &[ProgressRow];

    /// The per-roid field history, in long form.
    fn field_history(&self) -> Vec<FieldSample>;

    /// The mining delay the search settled on, offset by one tick: the
    /// first tick at or after the delay is the one that actually mines.
    /// Only meaningful after a successful `run`.
    fn mining_delay(&self) -> Seconds;
}

// ---------------------------------------------------------------------------
// Shared strategy state
// ---------------------------------------------------------------------------

/// State and helpers shared by mining policies: the live field, the frozen
/// base checkpoint, the clock, the fleet tank, and both logs.
#[derive(Debug, Clone)]
struct StrategyCore {
    config: RunConfig,

    // Frozen checkpoint, set once after the priming genrich events.
    base_field: HydroField,
    base_time: Seconds,
    base_progress: Vec<ProgressRow>,
    base_field_log: Vec<FieldRow>,

    // Live per-attempt state.
    field: HydroField,
    time: Seconds,
    last_genrich: Seconds,
    last_boost: Seconds,
    progress_log: Vec<ProgressRow>,
    field_log: Vec<FieldRow>,
    /// Combined tank level across the fleet.
    tank: Fixed64,
    tank_max: Fixed64,
    boosts: u32,
    status: MiningStatus,

    mining_delay: Seconds,
    max_mining_delay: Seconds,
}

impl StrategyCore {
    fn new(config: RunConfig, rng: &mut SimRng) -> Self {
        let base_field = HydroField::new(config.starting_hydro, rng);
        let tank_max = Fixed64::from_num(config.tank_capacity * config.miner_count);
        let max_mining_delay = 2 * config.genrich_interval;
        Self {
            field: base_field.clone(),
            base_field,
            base_time: 0,
            base_progress: Vec::new(),
            base_field_log: Vec::new(),
            time: 0,
            last_genrich: 0,
            last_boost: 0,
            progress_log: Vec::new(),
            field_log: Vec::new(),
            tank: Fixed64::ZERO,
            tank_max,
            boosts: 0,
            status: MiningStatus::Clearing,
            mining_delay: 0,
            max_mining_delay,
            config,
        }
    }

    /// Restore the frozen checkpoint for the next delay attempt.
    fn reset(&mut self) {
        self.field = self.base_field.clone();
        self.time = self.base_time;
        self.last_genrich = self.base_time;
        self.last_boost = 0;
        self.progress_log = self.base_progress.clone();
        self.field_log = self.base_field_log.clone();
        self.tank = Fixed64::ZERO;
        self.boosts = 0;
        self.status = MiningStatus::Genrich;
    }

    fn tick(&mut self) {
        self.time += self.config.tick_len;
    }

    fn write_progress(&mut self) {
        self.progress_log.push(ProgressRow {
            time: self.time,
            duration: report::format_duration(self.time),
            boosts: self.boosts,
            tank: self.tank,
            total_hydro: self.field.total_hydro(),
            status: self.status,
        });
    }

    fn write_field(&mut self) {
        let duration = report::format_duration(self.time);
        for roid in self.field.state() {
            self.field_log.push(FieldRow {
                time: self.time,
                duration: duration.clone(),
                roid: roid.label,
                remaining: roid.remaining,
                collected: roid.collected,
            });
        }
    }

    fn write_all(&mut self) {
        self.write_progress();
        self.write_field();
    }

    fn genrich_and_log(&mut self) {
        self.field
            .genrich(self.config.genesis_yield, self.config.enrich_multiplier);
        self.write_progress();
    }

    /// Current mining assignment: the top slots by remaining hydro, as many
    /// as the remote level sustains.
    fn remote_targets(&self) -> Vec<usize> {
        let mut order = self.field.sort_targets();
        order.truncate(self.config.max_targets);
        order
    }

    /// Post-goal phase: keep the clock and logs running, without mining,
    /// while the fleet flies out.
    fn exit_run(&mut self) {
        let completed = self.time;
        self.status = MiningStatus::Exiting;
        while self.time < completed + self.config.exit_duration {
            self.tick();
            self.write_all();
        }
    }
}

// ---------------------------------------------------------------------------
// Continuous mining
// ---------------------------------------------------------------------------

/// The continuous-mining policy: the fleet mines every tick it is allowed
/// to, converts the tank into artifact boosts as soon as it covers the
/// cost, and retargets after every boost.
#[derive(Debug, Clone)]
pub struct ContinuousMining {
    core: StrategyCore,
}

impl ContinuousMining {
    /// Build the strategy. The RNG seeds the initial roid distribution,
    /// the only randomness in a run.
    pub fn new(config: RunConfig, rng: &mut SimRng) -> Self {
        Self {
            core: StrategyCore::new(config, rng),
        }
    }

    /// One-time setup: advance to the configured start, fire the two
    /// priming genrich events one cooldown apart, and freeze the result as
    /// the checkpoint every delay attempt restarts from.
    fn base_field_setup(&mut self) {
        let core = &mut self.core;
        core.write_all();
        while core.time < core.config.genrich_start {
            core.tick();
            core.write_all();
        }
        core.genrich_and_log();
        core.status = MiningStatus::Genrich;
        while core.time < core.config.genrich_start + core.config.genrich_interval {
            core.tick();
            core.write_all();
        }
        core.genrich_and_log();
        // Same tick as the second genrich.
        core.base_field = core.field.clone();
        core.base_time = core.time;
        core.base_progress = core.progress_log.clone();
        core.base_field_log = core.field_log.clone();
    }
}

impl MiningStrategy for ContinuousMining {
    fn run(&mut self) -> bool {
        self.base_field_setup();
        let conversion_cost =
            Fixed64::from_num(self.core.config.boost_cost * self.core.config.miner_count);

        while self.core.mining_delay < self.core.max_mining_delay {
            self.core.reset();
            let mut targets = self.core.remote_targets();
            let delay_reference = self.core.last_genrich;
            let mut drained = false;

            while self.core.time < MAX_SIM_TIME {
                self.core.tick();

                // Mine, unless still inside the post-boost lag window.
                if self.core.time >= delay_reference + self.core.mining_delay {
                    if self.core.time > self.core.last_boost + self.core.config.boost_lag {
                        self.core.status = MiningStatus::Mining;
                        let mined = self
                            .core
                            .config
                            .mining_rate
                            .min(self.core.tank_max - self.core.tank);
                        self.core.tank += mined;
                        self.core.field.collect(mined, &targets);
                    } else {
                        self.core.status = MiningStatus::Waiting;
                    }
                }
                self.core.write_all();

                // Boost and move.
                if self.core.tank >= conversion_cost {
                    self.core.tank -= conversion_cost;
                    self.core.boosts += self.core.config.miner_count;
                    self.core.last_boost = self.core.time;
                    targets = self.core.remote_targets();
                    self.core.write_progress();
                }

                // Enrich.
                if self.core.time >= self.core.last_genrich + self.core.config.genrich_interval {
                    self.core.genrich_and_log();
                    self.core.last_genrich = self.core.time;
                }

                // Checks.
                if self.core.field.is_drained() {
                    drained = true;
                    break;
                }
                if self.core.boosts >= self.core.config.boost_goal {
                    self.core.exit_run();
                    return true;
                }
            }

            if !drained {
                // Exceeded max simulation time; fatal, not retryable.
                return false;
            }
            self.core.mining_delay += self.core.config.tick_len;
        }

        // Exceeded the delay budget.
        false
    }

    fn mining_progress(&self) -> &[ProgressRow] {
        &self.core.progress_log
    }

    fn field_history(&self) -> Vec<FieldSample> {
        report::melt_field_rows(&self.core.field_log)
    }

    fn mining_delay(&self) -> Seconds {
        self.core.mining_delay + self.core.config.tick_len
    }
}
