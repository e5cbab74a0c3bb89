use serde::{Deserialize, Serialize};

use crate::electorate::ElectorateConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// The electorate is regenerated from this every round.
    pub electorate: ElectorateConfig,
    /// Number of election rounds to run. Zero is a valid no-op run.
    pub n_rounds: usize,
    /// RNG seed. `None` seeds from OS entropy, which makes the run
    /// deliberately non-reproducible.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Seeded run over the default electorate.
    pub fn new(n_rounds: usize, seed: u64) -> Self {
        Self {
            electorate: ElectorateConfig::default(),
            n_rounds,
            seed: Some(seed),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            electorate: ElectorateConfig::default(),
            n_rounds: 5,
            seed: None,
        }
    }
}
