use serde::{Deserialize, Serialize};

/// Outcome of one simulated round, immutable once produced.
///
/// All three vectors are indexed by party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Zero-based round index.
    pub round: usize,
    /// Each party's share of the round's total votes.
    pub vote_shares: Vec<f64>,
    /// Seats awarded under the run's electoral system.
    pub seats: Vec<u32>,
    /// Party strength after folding in this round's seats.
    pub strength: Vec<f64>,
}

/// Result of a full simulation run: the per-round history in round order
/// plus the final strength vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub history: Vec<RoundRecord>,
    pub final_strength: Vec<f64>,
}
