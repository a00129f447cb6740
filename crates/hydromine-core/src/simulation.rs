//! The simulation facade: binds an input form and a seed to a strategy,
//! runs it, and exposes the outputs.
//!
//! The facade is deliberately forgiving at its outer edge: an input form
//! with selections still missing leaves the strategy unbound (a silent
//! no-op, not an error), and running with no strategy bound records an
//! invalid result instead of panicking. Genuine configuration mistakes,
//! like out-of-range levels or unsupported tick lengths, do surface as
//! errors.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, RunConfig, SimInput};
use crate::fixed::Seconds;
use crate::report::{FieldSample, ProgressRow};
use crate::rng::SimRng;
use crate::strategy::{ContinuousMining, MiningStrategy};

/// The available mining policies. A registry point: adding a policy means
/// adding a variant and a construction arm, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    ContinuousMining,
}

/// One simulation request: input form, RNG seed, and (once bound) the
/// strategy that will run it.
#[derive(Debug)]
pub struct Simulation {
    input: SimInput,
    rng: SimRng,
    strategy: Option<Box<dyn MiningStrategy>>,
    valid: bool,
}

impl Simulation {
    /// Create a simulation over an input form. The seed drives the initial
    /// roid distribution; everything after that is deterministic.
    pub fn new(input: SimInput, seed: u64) -> Self {
        Self {
            input,
            rng: SimRng::new(seed),
            strategy: None,
            valid: false,
        }
    }

    /// Resolve the input form and bind a strategy.
    ///
    /// An incomplete form is not ready to simulate: the strategy stays
    /// unbound and the call reports `Ok`. Real configuration errors
    /// propagate.
    pub fn set_strategy(&mut self, kind: StrategyKind) -> Result<(), ConfigError> {
        let config = match RunConfig::from_input(&self.input) {
            Ok(config) => config,
            Err(ConfigError::Incomplete) => return Ok(()),
            Err(err) => return Err(err),
        };
        self.strategy = Some(match kind {
            StrategyKind::ContinuousMining => {
                Box::new(ContinuousMining::new(config, &mut self.rng))
            }
        });
        Ok(())
    }

    /// Run the bound strategy and record validity. With no strategy bound
    /// the result is simply invalid.
    pub fn run(&mut self) {
        self.valid = match self.strategy.as_mut() {
            Some(strategy) => strategy.run(),
            None => false,
        };
    }

    /// Whether the last `run` reached the boost goal.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The aggregate progress table, once a strategy is bound.
    pub fn mining_progress(&self) -> Option<&[ProgressRow]> {
        self.strategy.as_deref().map(|s| s.mining_progress())
    }

    /// The long-form field history, once a strategy is bound.
    pub fn field_history(&self) -> Option<Vec<FieldSample>> {
        self.strategy.as_deref().map(|s| s.field_history())
    }

    /// The mining delay the search settled on. Only meaningful after a
    /// valid run.
    pub fn mining_delay(&self) -> Option<Seconds> {
        self.strategy.as_deref().map(|s| s.mining_delay())
    }
}
